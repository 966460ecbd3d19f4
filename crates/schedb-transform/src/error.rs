use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("root element is <{found}>, expected <CourseDB>")]
    UnexpectedRoot { found: String },
}
