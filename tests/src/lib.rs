#[cfg(test)]
mod storefront {
    mod checkout;
    mod integration;
}
