//! # Cart Store
//!
//! Owns the cart's item collection and tells subscribers whenever it changes.
//!
//! The collection is only ever replaced as a whole. Every replacement is
//! followed, before [`CartStore::replace`] returns, by one notification to
//! each subscriber, so nothing downstream can observe items and a total that
//! disagree.

use std::cell::RefCell;

use shopfront_common::catalog::product::{Product, total_price};
use shopfront_common::error::ShopError;
use tracing::debug;

/// What subscribers receive after a replacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartChange<'a> {
    pub items: &'a [Product],
    pub total: f64,
}

type Subscriber = Box<dyn Fn(&CartChange<'_>) -> Result<(), ShopError>>;

#[derive(Default)]
pub struct CartStore {
    items: RefCell<Vec<Product>>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback run after every replacement, in subscription order.
    ///
    /// Subscribing from inside a notification is not supported and panics.
    pub fn subscribe<F>(&self, subscriber: F)
    where
        F: Fn(&CartChange<'_>) -> Result<(), ShopError> + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    /// Stores `items` as the new collection, then notifies every subscriber.
    ///
    /// The new collection is in place even when a subscriber fails; the first
    /// failure is returned and later subscribers are skipped.
    pub fn replace(&self, items: Vec<Product>) -> Result<(), ShopError> {
        let snapshot: Vec<Product> = {
            let mut current = self.items.borrow_mut();
            *current = items;
            current.clone()
        };

        let change = CartChange {
            items: &snapshot,
            total: total_price(&snapshot),
        };
        debug!(items = change.items.len(), total = change.total, "cart replaced");

        for subscriber in self.subscribers.borrow().iter() {
            subscriber(&change)?;
        }
        Ok(())
    }

    pub fn items(&self) -> Vec<Product> {
        self.items.borrow().clone()
    }

    pub fn total_amount(&self) -> f64 {
        total_price(&self.items.borrow())
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn product(title: &str, price: f64) -> Product {
        Product::new(title, "", price, "").unwrap()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = CartStore::new();
        assert!(store.is_empty());
        assert_eq!(store.total_amount(), 0.0);
    }

    #[test]
    fn test_replace_notifies_with_new_state() {
        let store = Rc::new(CartStore::new());
        let seen: Rc<RefCell<Vec<(usize, f64)>>> = Rc::default();

        let log = Rc::clone(&seen);
        let weak = Rc::downgrade(&store);
        store.subscribe(move |change| {
            // State is already replaced when subscribers run.
            let store = weak.upgrade().unwrap();
            assert_eq!(store.len(), change.items.len());
            log.borrow_mut().push((change.items.len(), change.total));
            Ok(())
        });

        store.replace(vec![product("a", 34.95)]).unwrap();
        store
            .replace(vec![product("a", 34.95), product("b", 83.75)])
            .unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], (1, 34.95));
        assert_eq!(seen[1].0, 2);
        assert_eq!(format!("{:.2}", seen[1].1), "118.70");
    }

    #[test]
    fn test_subscribers_run_in_order() {
        let store = CartStore::new();
        let order: Rc<RefCell<Vec<&str>>> = Rc::default();

        for name in ["first", "second"] {
            let order = Rc::clone(&order);
            store.subscribe(move |_| {
                order.borrow_mut().push(name);
                Ok(())
            });
        }

        store.replace(Vec::new()).unwrap();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_failing_subscriber_keeps_new_items() {
        let store = CartStore::new();
        store.subscribe(|_| Err(ShopError::NotInitialized));

        let result = store.replace(vec![product("a", 1.0)]);
        assert_eq!(result, Err(ShopError::NotInitialized));
        assert_eq!(store.len(), 1);
    }
}
