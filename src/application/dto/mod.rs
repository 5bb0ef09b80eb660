/// Data Transfer Objects for application layer
mod convert_request;

pub use convert_request::ConvertRequest;
