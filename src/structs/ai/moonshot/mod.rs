pub mod moonshot_choice;
pub mod moonshot_message;
pub mod moonshot_request;
pub mod moonshot_response;
