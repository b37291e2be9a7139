#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProductDraftError {
    #[error("Product name is required")]
    NameRequired,
    #[error("Price must be at least {min:.2} but found {actual}")]
    PriceTooLow { min: f64, actual: f64 },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderDraftError {
    #[error("Add at least one product to the order")]
    Empty,
}
