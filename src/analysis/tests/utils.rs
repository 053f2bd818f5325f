use crate::ticket::Ticket;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

/// `departure` and `arrival` are `"dd.MM.yy H:mm"` stamps.
pub fn add_ticket(
    tickets: &mut Vec<Ticket>,
    origin: &str,
    destination: &str,
    carrier: &str,
    departure: &str,
    arrival: &str,
    price: u64,
) {
    let (departure_date, departure_time) = departure.split_once(' ').unwrap();
    let (arrival_date, arrival_time) = arrival.split_once(' ').unwrap();
    tickets.push(Ticket {
        origin: id(origin),
        destination: id(destination),
        carrier: id(carrier),
        departure_date: departure_date.to_string(),
        departure_time: departure_time.to_string(),
        arrival_date: arrival_date.to_string(),
        arrival_time: arrival_time.to_string(),
        price,
    });
}

pub fn priced(prices: &[u64]) -> Vec<Ticket> {
    let mut tickets = Vec::new();
    for price in prices {
        add_ticket(
            &mut tickets,
            "VVO",
            "TLV",
            "SU",
            "01.01.20 10:00",
            "01.01.20 12:30",
            *price,
        );
    }
    tickets
}

pub fn arb_id(prefix: &'static str) -> impl Strategy<Value = Arc<str>> {
    prop_oneof![
        Just(Arc::from(format!("{}_1", prefix))),
        Just(Arc::from(format!("{}_2", prefix))),
        Just(Arc::from(format!("{}_3", prefix))),
    ]
}

pub fn arb_ticket() -> impl Strategy<Value = Ticket> {
    (
        arb_id("AP"),
        arb_id("AP"),
        arb_id("CR"),
        0..1440u32,
        1..2000u32,
        0..50_000u64,
    )
        .prop_map(|(org, dst, carrier, dep, dur, price)| {
            let arr = dep + dur;
            Ticket {
                origin: org,
                destination: dst,
                carrier,
                departure_date: "01.01.20".to_string(),
                departure_time: format!("{}:{:02}", dep / 60, dep % 60),
                arrival_date: format!("{:02}.01.20", 1 + arr / 1440),
                arrival_time: format!("{}:{:02}", (arr % 1440) / 60, arr % 60),
                price,
            }
        })
}
