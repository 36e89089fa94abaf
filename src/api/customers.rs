//! Customer calls (`/clientes`)

use super::client::ApiClient;
use super::error::ClientResult;
use crate::endpoints::Endpoint;
use crate::models::{Customer, CustomerUpdate, NewCustomer, Reservation};

impl ApiClient {
    pub async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        self.fetch(Endpoint::list_customers()).await
    }

    /// Search by name. A blank term lists everyone, like clearing the search box.
    pub async fn search_customers(&self, name: &str) -> ClientResult<Vec<Customer>> {
        if name.trim().is_empty() {
            return self.list_customers().await;
        }
        self.fetch(Endpoint::search_customers(name)).await
    }

    pub async fn frequent_customers(&self) -> ClientResult<Vec<Customer>> {
        self.fetch(Endpoint::frequent_customers()).await
    }

    /// All customers plus the frequent ones, fetched in parallel
    pub async fn customer_overview(&self) -> ClientResult<(Vec<Customer>, Vec<Customer>)> {
        tokio::try_join!(self.list_customers(), self.frequent_customers())
    }

    /// Past and upcoming reservations of one customer
    pub async fn customer_history(&self, id: u32) -> ClientResult<Vec<Reservation>> {
        self.fetch(Endpoint::customer_history(id)).await
    }

    pub async fn create_customer(&self, customer: &NewCustomer) -> ClientResult<Customer> {
        tracing::info!("Creating customer");
        self.send(Endpoint::create_customer(), customer).await
    }

    pub async fn update_customer(&self, id: u32, update: &CustomerUpdate) -> ClientResult<Customer> {
        tracing::info!(id, "Updating customer");
        self.send(Endpoint::update_customer(id), update).await
    }
}
