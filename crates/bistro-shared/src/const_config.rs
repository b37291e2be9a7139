//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

pub mod client {
    /// Key under which the serialized session is kept in the storage backend
    pub const CLIENT_SESSION_STORAGE_KEY: &str = "current_session";
    pub const CLIENT_DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
}

pub mod route {
    //! Front end routes (not to be confused with the API paths in [`super::path`])

    pub const ROUTE_ROOT: &str = "/";
    pub const ROUTE_LOGIN: &str = "/login";
    /// Routes that do not require a session
    pub const ROUTE_PUBLIC: [&str; 2] = [ROUTE_ROOT, ROUTE_LOGIN];
    /// Every protected route is nested under this prefix
    pub const ROUTE_PREFIX: &str = "main";
    pub const ROUTE_HOME: &str = "/main";
    pub const ROUTE_DASHBOARD: &str = "/main/dashboard";
    pub const ROUTE_PRODUCTS: &str = "/main/products";
    pub const ROUTE_ORDERS_CREATE: &str = "/main/orders/create";
    pub const ROUTE_USERS: &str = "/main/users";
}

pub mod path {
    mod path_spec;
    pub use path_spec::PathSpec;
    pub const PATH_AUTH_LOGIN: PathSpec = PathSpec::post("/auth/login");
    pub const PATH_AUTH_REGISTER: PathSpec = PathSpec::post("/auth/register");
    pub const PATH_AUTH_USERS: PathSpec = PathSpec::get("/auth/users");
    pub const PATH_AUTH_USER_STATUS: PathSpec = PathSpec::patch("/auth/users/{id}/status");
    pub const PATH_ORDERS: PathSpec = PathSpec::get("/orders");
    pub const PATH_ORDERS_CREATE: PathSpec = PathSpec::post("/orders");
    pub const PATH_PRODUCTS: PathSpec = PathSpec::get("/products");
    pub const PATH_PRODUCTS_CREATE: PathSpec = PathSpec::post("/products");
    pub const PATH_PRODUCT_DELETE: PathSpec = PathSpec::delete("/products/{id}");
    pub const PATH_PRODUCT_UPDATE: PathSpec = PathSpec::patch("/products/{id}");
}

pub mod validation {
    /// Smallest price accepted for a product
    pub const VALIDATION_MIN_PRICE: f64 = 0.01;
}
