use crate::ticket::Ticket;

/// Tickets flying exactly `origin` -> `destination`, in input order.
pub fn filter_route<'a>(tickets: &'a [Ticket], origin: &str, destination: &str) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|t| *t.origin == *origin && *t.destination == *destination)
        .collect()
}
