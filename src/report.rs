use crate::analysis::PriceSummary;
use crate::ticket::CarrierId;
use crate::time::Minutes;
use clap::ValueEnum;
use colored::Colorize;
use std::collections::HashMap;
use tabled::builder::Builder;
use tabled::settings::{Alignment, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    Ru,
    En,
}

pub struct Labels {
    pub carrier: &'static str,
    pub min_time: &'static str,
    pub average_price: &'static str,
    pub median: &'static str,
    pub difference: &'static str,
    pub no_data: &'static str,
}

const RU: Labels = Labels {
    carrier: "Перевозчик",
    min_time: "Минимальное время полёта, мин",
    average_price: "Средняя цена:",
    median: "Медиана:",
    difference: "Разница между средней ценой и медианой:",
    no_data: "Нет билетов по заданному направлению",
};

const EN: Labels = Labels {
    carrier: "Carrier",
    min_time: "Shortest flight, min",
    average_price: "Average price:",
    median: "Median price:",
    difference: "Average minus median:",
    no_data: "No tickets for the requested route",
};

impl Lang {
    pub fn labels(self) -> &'static Labels {
        match self {
            Lang::Ru => &RU,
            Lang::En => &EN,
        }
    }
}

/// One row per carrier, sorted by carrier code.
pub fn render_durations(shortest: &HashMap<CarrierId, Minutes>, labels: &Labels) -> String {
    if shortest.is_empty() {
        return labels.no_data.yellow().to_string();
    }

    let mut rows: Vec<(&CarrierId, &Minutes)> = shortest.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let mut builder = Builder::default();
    builder.push_record([labels.carrier.to_string(), labels.min_time.to_string()]);
    for (carrier, minutes) in rows {
        builder.push_record([carrier.to_string(), minutes.to_string()]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

pub fn render_prices(summary: Option<&PriceSummary>, labels: &Labels) -> String {
    match summary {
        Some(s) => format!(
            "{} {:.2}\n{} {:.2}\n{} {:.2}",
            labels.average_price.bold(),
            s.average,
            labels.median.bold(),
            s.median,
            labels.difference.bold(),
            s.difference
        ),
        None => labels.no_data.yellow().to_string(),
    }
}
