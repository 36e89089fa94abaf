//! Reservation calls (`/reservas`)

use chrono::NaiveDate;

use super::client::ApiClient;
use super::error::ClientResult;
use crate::endpoints::Endpoint;
use crate::models::{
    AvailabilityQuery, AvailabilityResponse, DashboardData, NewReservation, Reservation,
    ReservationUpdate, Statistics,
};
use crate::status::StatusAction;

impl ApiClient {
    pub async fn list_reservations(&self) -> ClientResult<Vec<Reservation>> {
        self.fetch(Endpoint::list_reservations()).await
    }

    pub async fn reservations_on(&self, date: NaiveDate) -> ClientResult<Vec<Reservation>> {
        self.fetch(Endpoint::reservations_on(date)).await
    }

    pub async fn reservations_today(&self) -> ClientResult<Vec<Reservation>> {
        self.fetch(Endpoint::reservations_today()).await
    }

    pub async fn statistics(&self) -> ClientResult<Statistics> {
        self.fetch(Endpoint::reservation_stats()).await
    }

    /// Today's reservations and the counters, fetched in parallel
    pub async fn dashboard(&self) -> ClientResult<DashboardData> {
        let (today, stats) = tokio::try_join!(self.reservations_today(), self.statistics())?;
        Ok(DashboardData { today, stats })
    }

    /// Tables free for the given date, time and party size
    pub async fn check_availability(
        &self,
        query: &AvailabilityQuery,
    ) -> ClientResult<AvailabilityResponse> {
        self.send(Endpoint::check_availability(), query).await
    }

    pub async fn create_reservation(&self, reservation: &NewReservation) -> ClientResult<Reservation> {
        tracing::info!(
            customer_id = reservation.customer_id,
            table_id = reservation.table_id,
            "Creating reservation"
        );
        self.send(Endpoint::create_reservation(), reservation).await
    }

    pub async fn update_reservation(
        &self,
        id: u32,
        update: &ReservationUpdate,
    ) -> ClientResult<Reservation> {
        tracing::info!(id, "Updating reservation");
        self.send(Endpoint::update_reservation(id), update).await
    }

    /// Confirm, cancel or complete a reservation. The server decides whether
    /// the transition is allowed.
    pub async fn apply_action(&self, id: u32, action: StatusAction) -> ClientResult<Reservation> {
        tracing::info!(id, action = action.path_segment(), "Changing reservation status");
        self.fetch(Endpoint::reservation_action(id, action)).await
    }

    pub async fn delete_reservation(&self, id: u32) -> ClientResult<()> {
        tracing::info!(id, "Deleting reservation");
        self.call(Endpoint::delete_reservation(id)).await
    }
}
