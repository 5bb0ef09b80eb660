/// Use cases module containing application logic orchestration
mod convert_file;

pub use convert_file::ConvertFileUseCase;
