/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that coordinates the
/// encoding core with infrastructure through ports.
pub mod dto;
pub mod use_cases;
