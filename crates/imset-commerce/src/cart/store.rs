//! The cart store shared by every storefront view.

use crate::cart::{CartLine, CartPersistence, CartState, KvCartPersistence};
use crate::config::CartConfig;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use imset_cache::KeyValueBackend;
use std::cell::RefCell;
use std::rc::Rc;

/// A cart store handed to views that both read and mutate it.
pub type SharedCart<P> = Rc<RefCell<CartStore<P>>>;

/// In-memory cart backed by a persistence port.
///
/// Every mutation runs to completion and writes the whole state through
/// the port before returning. Totals are recomputed on each query.
#[derive(Debug)]
pub struct CartStore<P> {
    state: CartState,
    persistence: P,
    currency: Currency,
}

impl<P: CartPersistence> CartStore<P> {
    /// Open a store, restoring whatever the port has saved.
    ///
    /// Line prices are read as minor units of `currency`.
    pub fn open(persistence: P, currency: Currency) -> Self {
        let state = persistence.load().unwrap_or_default();
        Self {
            state,
            persistence,
            currency,
        }
    }

    /// Add a line, merging with an existing line for the same product.
    ///
    /// When the product is already in the cart only the quantity changes;
    /// the title, price and display metadata of the first add are kept.
    pub fn add(&mut self, line: CartLine) {
        match self.state.get_mut(line.product_id()) {
            Some(existing) => {
                existing.add_quantity(line.quantity());
                tracing::debug!(
                    product_id = %line.product_id(),
                    quantity = existing.quantity(),
                    "cart line merged"
                );
            }
            None => {
                tracing::debug!(
                    product_id = %line.product_id(),
                    quantity = line.quantity(),
                    "cart line added"
                );
                self.state.push(line);
            }
        }
        self.persist();
    }

    /// Remove the line for a product. Unknown ids are ignored.
    pub fn remove(&mut self, product_id: &ProductId) {
        if self.state.remove(product_id) {
            tracing::debug!(%product_id, "cart line removed");
        }
        self.persist();
    }

    /// Replace a line's quantity. Zero or negative removes the line;
    /// unknown ids are ignored.
    ///
    /// Quantities above `u32::MAX` are clamped to `u32::MAX`.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.state.get_mut(product_id) {
            line.set_quantity(quantity);
            tracing::debug!(%product_id, quantity, "cart quantity set");
        }
        self.persist();
    }

    /// Empty the cart, e.g. after a successful checkout.
    pub fn clear(&mut self) {
        self.state.clear();
        tracing::debug!("cart cleared");
        self.persist();
    }

    /// `Σ unit_price × quantity` over the current lines.
    pub fn total(&self) -> Money {
        self.state.total(self.currency)
    }

    /// `Σ quantity` over the current lines.
    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        self.state.items()
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.state.get(product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Wrap the store for sharing between views.
    pub fn into_shared(self) -> SharedCart<P> {
        Rc::new(RefCell::new(self))
    }

    fn persist(&self) {
        self.persistence.save(&self.state);
    }
}

impl<B: KeyValueBackend> CartStore<KvCartPersistence<B>> {
    /// Open a store over a Key-Value backend using the configured storage
    /// key and currency.
    pub fn from_config(backend: B, config: &CartConfig) -> Self {
        Self::open(
            KvCartPersistence::from_config(backend, config),
            config.currency,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Port that records how often it was asked to save.
    #[derive(Default)]
    struct CountingPersistence {
        saved: RefCell<Option<CartState>>,
        saves: Cell<usize>,
    }

    impl CartPersistence for CountingPersistence {
        fn load(&self) -> Option<CartState> {
            self.saved.borrow().clone()
        }

        fn save(&self, state: &CartState) {
            self.saves.set(self.saves.get() + 1);
            *self.saved.borrow_mut() = Some(state.clone());
        }
    }

    fn store() -> CartStore<CountingPersistence> {
        CartStore::open(CountingPersistence::default(), Currency::TND)
    }

    fn line(id: &str, price: i64, qty: u32) -> CartLine {
        CartLine::new(ProductId::new(id), format!("title {id}"), price, qty).unwrap()
    }

    #[test]
    fn test_scenario_add_merge_set_remove() {
        let mut cart = store();
        let p1 = ProductId::new("p1");

        cart.add(line("p1", 10, 2));
        cart.add(line("p1", 10, 1));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(&p1).unwrap().quantity(), 3);
        assert_eq!(cart.total().amount_minor, 30);

        cart.set_quantity(&p1, 1);
        assert_eq!(cart.total().amount_minor, 10);

        cart.remove(&p1);
        assert_eq!(cart.item_count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_first_snapshot_wins() {
        let mut cart = store();
        cart.add(line("p1", 10, 1).with_image("/a.png"));
        let repriced = CartLine::new(ProductId::new("p1"), "renamed", 99, 1)
            .unwrap()
            .with_image("/b.png");
        cart.add(repriced);

        let kept = cart.line(&ProductId::new("p1")).unwrap();
        assert_eq!(kept.title(), "title p1");
        assert_eq!(kept.unit_price(), 10);
        assert_eq!(kept.image_url(), Some("/a.png"));
        assert_eq!(kept.quantity(), 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = store();
        cart.add(line("b", 1, 1));
        cart.add(line("a", 1, 1));
        cart.add(line("c", 1, 1));
        cart.add(line("a", 1, 4));
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id().as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn test_non_positive_quantity_removes() {
        for quantity in [0, -3] {
            let mut cart = store();
            cart.add(line("p1", 10, 2));
            cart.add(line("p2", 5, 1));
            cart.set_quantity(&ProductId::new("p1"), quantity);

            let mut expected = store();
            expected.add(line("p1", 10, 2));
            expected.add(line("p2", 5, 1));
            expected.remove(&ProductId::new("p1"));

            assert_eq!(cart.state(), expected.state());
            assert!(cart.line(&ProductId::new("p1")).is_none());
        }
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let mut cart = store();
        cart.add(line("p1", 10, 2));
        let before = cart.state().clone();

        cart.remove(&ProductId::new("ghost"));
        cart.set_quantity(&ProductId::new("ghost"), 5);

        assert_eq!(cart.state(), &before);
        assert_eq!(cart.total().amount_minor, 20);
    }

    #[test]
    fn test_clear() {
        let mut cart = store();
        cart.add(line("p1", 10, 2));
        cart.add(line("p2", 7, 1));
        cart.clear();
        assert_eq!(cart.total(), Money::zero(Currency::TND));
        assert_eq!(cart.item_count(), 0);
        assert!(cart.lines().is_empty());
    }

    #[test]
    fn test_every_mutation_persists() {
        let mut cart = store();
        cart.add(line("p1", 10, 1));
        cart.set_quantity(&ProductId::new("p1"), 4);
        cart.remove(&ProductId::new("missing"));
        cart.clear();
        assert_eq!(cart.persistence().saves.get(), 4);
        assert_eq!(cart.persistence().load(), Some(CartState::new()));
    }

    #[test]
    fn test_add_always_appends_or_merges() {
        let mut cart = CartStore::open(CountingPersistence::default(), Currency::USD);
        cart.add(line("p1", 100, 1));
        cart.add(line("p2", 250, 2));
        cart.add(line("p1", 100, 3));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 6);
        assert_eq!(cart.total(), Money::new(900, Currency::USD));
        assert_eq!(cart.persistence().saves.get(), 3);
    }

    #[test]
    fn test_restored_cart_is_priced_in_store_currency() {
        let mut first = store();
        first.add(line("p1", 1_500, 2));
        let saved = first.persistence().load();

        let persistence = CountingPersistence {
            saved: RefCell::new(saved),
            ..CountingPersistence::default()
        };
        let reopened = CartStore::open(persistence, Currency::EUR);
        assert_eq!(reopened.item_count(), 2);
        assert_eq!(reopened.total(), Money::new(3_000, Currency::EUR));
    }

    #[test]
    fn test_huge_quantity_is_clamped() {
        let mut cart = store();
        cart.add(line("p1", 1, 1));
        cart.set_quantity(&ProductId::new("p1"), i64::MAX);
        assert_eq!(cart.item_count(), u64::from(u32::MAX));
    }

    #[test]
    fn test_shared_store_visible_to_all_holders() {
        let shared = store().into_shared();
        let view = Rc::clone(&shared);
        shared.borrow_mut().add(line("p1", 10, 2));
        assert_eq!(view.borrow().item_count(), 2);
    }
}
