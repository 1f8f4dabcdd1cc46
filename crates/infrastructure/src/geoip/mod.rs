pub mod maxmind;

pub use maxmind::MaxmindGeoEnricher;
