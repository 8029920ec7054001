//! Question review core: data model, review session, export, and the
//! collaborators they are wired to.

pub mod capabilities;
pub mod export;
pub mod model;
pub mod session;
pub mod source;

pub use capabilities::{Confirm, Delivery, DeliveryError, DeliverySink, FileSink};
pub use export::{
    build_export, deliver_export, encode_csv, feedback_rows, CsvDocument, ExportOutcome,
    FeedbackRow, CSV_HEADER, EXPORT_FILENAME, NOTHING_TO_EXPORT,
};
pub use model::{DateKey, Question, Response, ResponseStore, Verdict};
pub use session::{LoadError, ReviewSession, RESET_PROMPT, RESPONSES_KEY};
pub use source::{source_for, FileSource, HttpSource, QuestionSource, SourceError, StaticSource};
