//! Broker records returned by `/api/cvm/corretoras/v1`.

use serde::{Deserialize, Deserializer, Serialize};

/// A brokerage firm as registered with the CVM.
///
/// Every field is a string on the wire, dates and money included. Missing
/// or `null` fields deserialize to an empty string; unknown fields are
/// ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Broker {
    /// Neighbourhood.
    #[serde(deserialize_with = "null_as_empty")]
    pub bairro: String,
    /// Postal code (CEP).
    #[serde(deserialize_with = "null_as_empty")]
    pub cep: String,
    /// Company registry number (CNPJ), digits only.
    #[serde(deserialize_with = "null_as_empty")]
    pub cnpj: String,
    /// CVM registration code.
    #[serde(deserialize_with = "null_as_empty")]
    pub codigo_cvm: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub complemento: String,
    /// Date the current `status` took effect.
    #[serde(deserialize_with = "null_as_empty")]
    pub data_inicio_situacao: String,
    /// Reference date of `valor_patrimonio_liquido`.
    #[serde(deserialize_with = "null_as_empty")]
    pub data_patrimonio_liquido: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub data_registro: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    /// Street address.
    #[serde(deserialize_with = "null_as_empty")]
    pub logradouro: String,
    /// City.
    #[serde(deserialize_with = "null_as_empty")]
    pub municipio: String,
    /// Registered legal name.
    #[serde(deserialize_with = "null_as_empty")]
    pub nome_social: String,
    /// Trading name shown to customers.
    #[serde(deserialize_with = "null_as_empty")]
    pub nome_comercial: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub pais: String,
    /// Registration status, e.g. `EM FUNCIONAMENTO NORMAL` or `CANCELADA`.
    #[serde(deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub telefone: String,
    /// Participant category, e.g. `CORRETORAS`.
    #[serde(rename = "type", deserialize_with = "null_as_empty")]
    pub broker_type: String,
    /// State (UF) code, e.g. `SP`.
    #[serde(deserialize_with = "null_as_empty")]
    pub uf: String,
    /// Net equity as reported upstream, kept verbatim.
    #[serde(deserialize_with = "null_as_empty")]
    pub valor_patrimonio_liquido: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_fields_become_empty() {
        let broker: Broker =
            serde_json::from_str(r#"{"cnpj": "123", "email": null, "uf": "RJ"}"#).unwrap();
        assert_eq!(broker.cnpj, "123");
        assert_eq!(broker.email, "");
        assert_eq!(broker.uf, "RJ");
        assert_eq!(broker.nome_comercial, "");
    }

    #[test]
    fn type_field_keeps_wire_name() {
        let broker = Broker {
            broker_type: "CORRETORAS".into(),
            ..Broker::default()
        };
        let value = serde_json::to_value(&broker).unwrap();
        assert_eq!(value["type"], "CORRETORAS");
        assert!(value.get("broker_type").is_none());
        assert_eq!(value.as_object().unwrap().len(), 19);
    }

    #[test]
    fn non_string_field_is_rejected() {
        let result = serde_json::from_str::<Broker>(r#"{"cnpj": 123}"#);
        assert!(result.is_err());
    }
}
