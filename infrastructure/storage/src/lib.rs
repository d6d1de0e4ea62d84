pub mod product {
    pub mod record;
    pub mod store;
}
pub mod seed;
