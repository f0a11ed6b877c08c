use thiserror::Error;

use crate::carserver::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum CodecType {
    Json,
    Hex,
    Base64,
}

pub trait Codec {
    type Error;

    fn encode(&self, action: &Action) -> Result<String, Self::Error>;
    fn decode(&self, input: &str) -> Result<Action, Self::Error>;
}

pub fn create_codec(ty: CodecType) -> Box<dyn Codec<Error = CodecError> + Send + Sync> {
    match ty {
        CodecType::Json => Box::new(Json),
        CodecType::Hex => Box::new(Hex),
        CodecType::Base64 => Box::new(Base64),
    }
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("failed to (de)serialize action: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("failed to decode hex string: {0}")]
    HexDecodeError(#[from] hex::FromHexError),
    #[error("failed to decode base64 string: {0}")]
    Base64DecodeError(#[from] base64::DecodeError),
    #[error("empty input")]
    EmptyInput,
}

pub struct Json;
impl Codec for Json {
    type Error = CodecError;

    fn encode(&self, action: &Action) -> Result<String, Self::Error> {
        Ok(serde_json::to_string(action)?)
    }

    fn decode(&self, input: &str) -> Result<Action, Self::Error> {
        if input.is_empty() {
            return Err(CodecError::EmptyInput);
        }
        Ok(serde_json::from_str(input)?)
    }
}

pub struct Hex;
impl Codec for Hex {
    type Error = CodecError;

    fn encode(&self, action: &Action) -> Result<String, Self::Error> {
        Ok(hex::encode(serde_json::to_vec(action)?))
    }

    fn decode(&self, input: &str) -> Result<Action, Self::Error> {
        let decoded = hex::decode(input)?;
        if decoded.is_empty() {
            return Err(CodecError::EmptyInput);
        }
        Ok(serde_json::from_slice(&decoded)?)
    }
}

pub struct Base64;
impl Codec for Base64 {
    type Error = CodecError;

    fn encode(&self, action: &Action) -> Result<String, Self::Error> {
        Ok(base64::encode(serde_json::to_vec(action)?))
    }

    fn decode(&self, input: &str) -> Result<Action, Self::Error> {
        let decoded = base64::decode(input)?;
        if decoded.is_empty() {
            return Err(CodecError::EmptyInput);
        }
        Ok(serde_json::from_slice(&decoded)?)
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;
    use crate::carserver::{HvacSteeringWheelHeaterAction, VehicleActionMsg};

    fn steering_wheel_on() -> Action {
        VehicleActionMsg::HvacSteeringWheelHeaterAction(HvacSteeringWheelHeaterAction { power_on: true }).into()
    }

    const STEERING_WHEEL_ON_JSON: &str =
        r#"{"vehicleAction":{"hvacSteeringWheelHeaterAction":{"powerOn":true}}}"#;

    #[test]
    fn test_json_encode() {
        let encoded = Json.encode(&steering_wheel_on()).unwrap();
        assert_eq!(encoded, STEERING_WHEEL_ON_JSON);
    }

    #[test]
    fn test_hex_and_base64_wrap_json() {
        let action = steering_wheel_on();

        let hex_line = Hex.encode(&action).unwrap();
        assert_eq!(hex_line, hex::encode(STEERING_WHEEL_ON_JSON));

        let b64_line = Base64.encode(&action).unwrap();
        assert_eq!(base64::decode(&b64_line).unwrap(), STEERING_WHEEL_ON_JSON.as_bytes());
        assert_eq!(Base64.decode(&b64_line).unwrap(), action);
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(Json.decode(""), Err(CodecError::EmptyInput)));
        assert!(matches!(Hex.decode(""), Err(CodecError::EmptyInput)));
        assert!(matches!(Hex.decode("zz"), Err(CodecError::HexDecodeError(_))));
        assert!(matches!(Json.decode("{"), Err(CodecError::JsonError(_))));
    }

    #[test]
    fn test_codec_type_names() {
        assert_eq!(CodecType::from_str("base64").unwrap(), CodecType::Base64);
        assert_eq!(CodecType::Hex.as_ref(), "hex");
        assert!(CodecType::from_str("pronto").is_err());

        let codec = create_codec(CodecType::Json);
        assert_eq!(codec.encode(&steering_wheel_on()).unwrap(), STEERING_WHEEL_ON_JSON);
    }
}
