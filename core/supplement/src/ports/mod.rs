//! Ports & Adapters のポート定義

pub mod outbound;
