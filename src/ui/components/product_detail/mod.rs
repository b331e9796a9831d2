mod page;

pub use page::ProductDetails;
