mod candidate;
mod customer_id;
mod derived;
mod document;
mod extracted_text;
mod phone;
mod postal_code;
mod province;
mod record;
mod validate;

pub use candidate::CandidateRecord;
pub use customer_id::CustomerId;
pub use derived::{DerivationPolicy, DerivedRecord};
pub use document::{ContentType, Document, DocumentId};
pub use extracted_text::{ExtractedText, PageText};
pub use phone::PhoneNumber;
pub use postal_code::PostalCode;
pub use province::Province;
pub use record::ValidatedRecord;
pub use validate::{validate, FieldValidationError, RecordField};
