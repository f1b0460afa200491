// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::providers::fireblocks::{ClientManager, LegacySdkApi, VaultsApi};

/// Shared handler state: one lifecycle manager per client generation.
#[derive(Clone)]
pub struct AppState {
    pub vaults: Arc<ClientManager<dyn VaultsApi>>,
    pub sdk: Arc<ClientManager<dyn LegacySdkApi>>,
}

impl AppState {
    pub fn new(
        vaults: ClientManager<dyn VaultsApi>,
        sdk: ClientManager<dyn LegacySdkApi>,
    ) -> Self {
        Self {
            vaults: Arc::new(vaults),
            sdk: Arc::new(sdk),
        }
    }
}
