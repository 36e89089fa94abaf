//! Table calls (`/mesas`)

use super::client::ApiClient;
use super::error::ClientResult;
use crate::endpoints::Endpoint;
use crate::models::{NewTable, Table, TableUpdate};

impl ApiClient {
    pub async fn list_tables(&self) -> ClientResult<Vec<Table>> {
        self.fetch(Endpoint::list_tables()).await
    }

    /// Tables currently flagged as available
    pub async fn available_tables(&self) -> ClientResult<Vec<Table>> {
        self.fetch(Endpoint::available_tables()).await
    }

    /// Tables seating at least `min_capacity`
    pub async fn tables_with_capacity(&self, min_capacity: u32) -> ClientResult<Vec<Table>> {
        self.fetch(Endpoint::tables_with_capacity(min_capacity)).await
    }

    pub async fn create_table(&self, table: &NewTable) -> ClientResult<Table> {
        tracing::info!(number = table.number, "Creating table");
        self.send(Endpoint::create_table(), table).await
    }

    pub async fn update_table(&self, id: u32, update: &TableUpdate) -> ClientResult<Table> {
        tracing::info!(id, "Updating table");
        self.send(Endpoint::update_table(id), update).await
    }

    pub async fn delete_table(&self, id: u32) -> ClientResult<()> {
        tracing::info!(id, "Deleting table");
        self.call(Endpoint::delete_table(id)).await
    }
}
