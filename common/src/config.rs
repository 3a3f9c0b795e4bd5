pub struct Config {
    /// Identifier of the host element the shop mounts under.
    ///
    /// Must exist in the host surface before the application starts.
    pub mount_point: String,
    /// Identifier given to the catalog container. Product entries mount here.
    pub catalog_list_id: String,
    /// Currency symbol shown in front of prices and the cart total.
    pub currency: String,
    pub no_banner: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mount_point: String::from("app"),
            catalog_list_id: String::from("prod-list"),
            currency: String::from("€"),
            no_banner: false,
            quiet: 0,
        }
    }
}
