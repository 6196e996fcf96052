pub mod similarity;
pub mod vector;
