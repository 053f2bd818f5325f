use crate::error::AnalysisError;
use crate::ticket::{CarrierId, Ticket};
use crate::time::Minutes;
use std::collections::HashMap;
use tracing::warn;

/// Shortest flight per carrier. Stops at the first ticket with an unparsable schedule.
pub fn min_flight_minutes<'a, I>(tickets: I) -> Result<HashMap<CarrierId, Minutes>, AnalysisError>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    let mut shortest: HashMap<CarrierId, Minutes> = HashMap::new();
    for ticket in tickets {
        let minutes = ticket.flight_minutes()?;
        if minutes.is_negative() {
            warn!(
                carrier = %ticket.carrier,
                departure = %format!("{} {}", ticket.departure_date, ticket.departure_time),
                arrival = %format!("{} {}", ticket.arrival_date, ticket.arrival_time),
                %minutes,
                "ticket arrives before it departs"
            );
        }
        shortest
            .entry(ticket.carrier.clone())
            .and_modify(|m| *m = (*m).min(minutes))
            .or_insert(minutes);
    }
    Ok(shortest)
}
