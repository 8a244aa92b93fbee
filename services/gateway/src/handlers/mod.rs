pub mod categories;
pub mod distribution;
pub mod health;
pub mod kpis;
