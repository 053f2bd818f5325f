use crate::ticket::Ticket;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSummary {
    pub average: f64,
    pub median: f64,
    /// `average - median`; positive when the average is higher.
    pub difference: f64,
}

impl PriceSummary {
    /// `None` when there are no prices to summarize.
    pub fn from_prices(mut prices: Vec<u64>) -> Option<PriceSummary> {
        if prices.is_empty() {
            return None;
        }
        prices.sort_unstable();

        let len = prices.len();
        let median = if len % 2 == 0 {
            (prices[len / 2 - 1] as f64 + prices[len / 2] as f64) / 2.0
        } else {
            prices[len / 2] as f64
        };
        let average = prices.iter().map(|p| *p as f64).sum::<f64>() / len as f64;

        Some(PriceSummary {
            average,
            median,
            difference: average - median,
        })
    }
}

pub fn price_summary<'a, I>(tickets: I) -> Option<PriceSummary>
where
    I: IntoIterator<Item = &'a Ticket>,
{
    PriceSummary::from_prices(tickets.into_iter().map(|t| t.price).collect())
}
