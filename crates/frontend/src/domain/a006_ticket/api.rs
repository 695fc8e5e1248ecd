use contracts::domain::a006_ticket::{Ticket, TicketForm};
use contracts::shared::api::ApiError;

use crate::shared::http::{RequestScope, Resource};

const RESOURCE: &str = "tickets";

fn tickets(scope: RequestScope) -> Resource {
    Resource::new(RESOURCE, scope)
}

pub async fn fetch_tickets(scope: RequestScope) -> Result<Vec<Ticket>, ApiError> {
    tickets(scope).list().await
}

pub async fn fetch_ticket(scope: RequestScope, id: String) -> Result<Ticket, ApiError> {
    tickets(scope).get(&id).await
}

pub async fn create_ticket(scope: RequestScope, form: TicketForm) -> Result<(), ApiError> {
    tickets(scope).create(&form).await
}

pub async fn update_ticket(scope: RequestScope, id: String, form: TicketForm) -> Result<(), ApiError> {
    tickets(scope).update(&id, &form).await
}

pub async fn delete_ticket(scope: RequestScope, id: String) -> Result<(), ApiError> {
    tickets(scope).delete(&id).await
}
