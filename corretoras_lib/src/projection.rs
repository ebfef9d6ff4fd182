//! Reduced broker view used by the HTML page.

use brasilapi_cvm::types::Broker;
use serde::{Deserialize, Serialize};

/// The three broker fields shown on the listing page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BrokerDisplay {
    pub nome_comercial: String,
    pub valor_patrimonio_liquido: String,
    pub uf: String,
}

impl From<&Broker> for BrokerDisplay {
    fn from(broker: &Broker) -> Self {
        Self {
            nome_comercial: broker.nome_comercial.clone(),
            valor_patrimonio_liquido: broker.valor_patrimonio_liquido.clone(),
            uf: broker.uf.clone(),
        }
    }
}

/// Projects every broker to its display form, keeping upstream order.
pub fn project(brokers: &[Broker]) -> Vec<BrokerDisplay> {
    brokers.iter().map(BrokerDisplay::from).collect()
}
