//! gcli / supplement 共通ライブラリ
//!
//! Gemini への 1 ターン呼び出し（リクエスト組み立て・送信・応答の取り出し）と、
//! 両コマンドで共有するエラー型・ポート・標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// 標準アダプタ
pub mod adapter;

/// LLMドライバーとプロバイダ
pub mod llm;

/// 配線ヘルパー
pub mod wiring;
