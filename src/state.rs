/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc、起動後は不変)
 */
use std::sync::Arc;

use crate::services::auth::{AuthGate, RefreshExchange};

#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: Arc<AuthGate>,
    pub refresh: Arc<RefreshExchange>,
}

impl AppState {
    pub fn new(gate: Arc<AuthGate>, refresh: Arc<RefreshExchange>) -> Self {
        Self { gate, refresh }
    }
}
