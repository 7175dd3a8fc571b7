pub mod moonshot;
