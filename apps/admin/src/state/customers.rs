//! Customers slice: the list, plus one customer opened in detail.

use bolt_client::api::customers::CustomerDetail;
use bolt_core::types::Customer;

use super::LoadState;

#[derive(Debug, Default)]
pub struct CustomersSlice {
    pub load: LoadState,
    pub customers: Vec<Customer>,

    /// The customer currently opened, with sales, payments, and aggregates.
    pub detail: Option<CustomerDetail>,
}

impl CustomersSlice {
    pub fn pending(&mut self) {
        self.load = LoadState::Loading;
    }

    pub fn loaded(&mut self, customers: Vec<Customer>) {
        self.load = LoadState::Loaded;
        self.customers = customers;
    }

    pub fn detail_loaded(&mut self, detail: CustomerDetail) {
        self.load = LoadState::Loaded;
        self.detail = Some(detail);
    }

    pub fn failed(&mut self, message: String) {
        self.load = LoadState::Failed(message);
    }

    /// After a create or update: replace in place, or append if new.
    pub fn upsert(&mut self, customer: Customer) {
        match self.customers.iter_mut().find(|c| c.id == customer.id) {
            Some(existing) => *existing = customer,
            None => self.customers.push(customer),
        }
    }

    pub fn removed(&mut self, id: &str) {
        self.customers.retain(|c| c.id != id);
        if self
            .detail
            .as_ref()
            .is_some_and(|d| d.customer.id == id)
        {
            self.detail = None;
        }
    }

    pub fn find(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str, name: &str) -> Customer {
        serde_json::from_value(serde_json::json!({"_id": id, "name": name})).unwrap()
    }

    #[test]
    fn test_upsert_replaces_or_appends() {
        let mut slice = CustomersSlice::default();
        slice.loaded(vec![customer("c1", "Sharma Traders")]);

        slice.upsert(customer("c1", "Sharma & Sons"));
        assert_eq!(slice.customers.len(), 1);
        assert_eq!(slice.customers[0].name, "Sharma & Sons");

        slice.upsert(customer("c2", "Verma Hardware"));
        assert_eq!(slice.customers.len(), 2);
    }

    #[test]
    fn test_removed_drops_from_list() {
        let mut slice = CustomersSlice::default();
        slice.loaded(vec![customer("c1", "A"), customer("c2", "B")]);
        slice.removed("c1");
        assert_eq!(slice.customers.len(), 1);
        assert!(slice.find("c1").is_none());
        assert!(slice.find("c2").is_some());
    }
}
