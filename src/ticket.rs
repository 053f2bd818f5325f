use crate::error::AnalysisError;
use crate::time::{Minutes, minutes_between, parse_stamp};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

pub type AirportId = Arc<str>;
pub type CarrierId = Arc<str>;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Ticket {
    pub origin: AirportId,
    pub destination: AirportId,
    pub carrier: CarrierId,
    pub departure_date: String,
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub price: u64,
}

impl Ticket {
    pub fn departure(&self) -> Result<NaiveDateTime, AnalysisError> {
        parse_stamp(&self.departure_date, &self.departure_time)
    }

    pub fn arrival(&self) -> Result<NaiveDateTime, AnalysisError> {
        parse_stamp(&self.arrival_date, &self.arrival_time)
    }

    /// Time in the air, arrival minus departure. Not checked for sign.
    pub fn flight_minutes(&self) -> Result<Minutes, AnalysisError> {
        Ok(minutes_between(self.departure()?, self.arrival()?))
    }
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct TicketRequest {
    pub tickets: Vec<Ticket>,
}

impl TicketRequest {
    pub fn load_from_file(path: &Path) -> Result<Self, AnalysisError> {
        let data = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => AnalysisError::ResourceNotFound {
                path: path.to_path_buf(),
            },
            _ => AnalysisError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let request = Self::from_json_str(&data)?;
        debug!(path = %path.display(), tickets = request.tickets.len(), "loaded tickets");
        Ok(request)
    }

    pub fn from_json_str(data: &str) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_str(data)?)
    }
}
