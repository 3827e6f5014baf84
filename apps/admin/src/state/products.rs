//! Products slice: the catalogue, categories, and low-stock list.

use bolt_core::types::Product;

use super::LoadState;

#[derive(Debug, Default)]
pub struct ProductsSlice {
    pub load: LoadState,
    pub products: Vec<Product>,
    pub categories: Vec<String>,

    /// Products at or below minimum stock, for the dashboard alert.
    pub low_stock: Vec<Product>,

    /// The product currently opened in detail.
    pub current: Option<Product>,
}

impl ProductsSlice {
    pub fn pending(&mut self) {
        self.load = LoadState::Loading;
    }

    pub fn loaded(&mut self, products: Vec<Product>) {
        self.load = LoadState::Loaded;
        self.products = products;
    }

    pub fn current_loaded(&mut self, product: Product) {
        self.load = LoadState::Loaded;
        self.current = Some(product);
    }

    pub fn categories_loaded(&mut self, categories: Vec<String>) {
        self.categories = categories;
    }

    pub fn low_stock_loaded(&mut self, products: Vec<Product>) {
        self.low_stock = products;
    }

    pub fn failed(&mut self, message: String) {
        self.load = LoadState::Failed(message);
    }

    pub fn upsert(&mut self, product: Product) {
        if self.current.as_ref().is_some_and(|p| p.id == product.id) {
            self.current = Some(product.clone());
        }
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => self.products.push(product),
        }
    }

    pub fn removed(&mut self, id: &str) {
        self.products.retain(|p| p.id != id);
        if self.current.as_ref().is_some_and(|p| p.id == id) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        serde_json::from_value(serde_json::json!({"_id": id, "name": "Hammer"})).unwrap()
    }

    #[test]
    fn test_upsert_refreshes_current() {
        let mut slice = ProductsSlice::default();
        slice.loaded(vec![product("p1")]);
        slice.current_loaded(product("p1"));

        let mut updated = product("p1");
        updated.name = "Claw Hammer".to_string();
        slice.upsert(updated);

        assert_eq!(slice.products[0].name, "Claw Hammer");
        assert_eq!(slice.current.as_ref().unwrap().name, "Claw Hammer");
    }
}
