use anyhow::Context;
use registry_codec::{encode_call, encode_field, top_encode_bool, top_encode_hashes, top_encode_u8};

use crate::{cli::CallDataCommand, parse_account, IdentityProfile};

/// Builds the `data` field of a registry transaction, checked against `abi_json`.
pub fn call_data(abi_json: &str, call: &CallDataCommand) -> anyhow::Result<String> {
    let (endpoint, args) = match call {
        CallDataCommand::Create(args) => ("createIdentity", profile_arguments(&args.to_profile()?)?),
        CallDataCommand::Modify(args) => ("modifyIdentity", profile_arguments(&args.to_profile()?)?),
        CallDataCommand::Remove => ("removeIdentity", Vec::new()),
        CallDataCommand::SetValidity(args) => {
            let account = parse_account(&args.account)?;
            let args = vec![
                account.to_address().as_bytes().to_vec(),
                top_encode_bool(args.valid),
            ];
            ("setIdentityValidity", args)
        }
    };

    encode_call(abi_json, endpoint, &args).with_context(|| format!("encoding {endpoint} call"))
}

fn profile_arguments(profile: &IdentityProfile) -> anyhow::Result<Vec<Vec<u8>>> {
    let field = |text: &str, label: &str| -> anyhow::Result<Vec<u8>> {
        let bytes = encode_field(text).with_context(|| format!("encoding {label}"))?;
        Ok(bytes.to_vec())
    };

    Ok(vec![
        field(&profile.id, "id")?,
        field(&profile.name, "name")?,
        top_encode_u8(profile.gender),
        field(&profile.birthday, "birthday")?,
        field(&profile.nationality, "nationality")?,
        field(&profile.province, "province")?,
        field(&profile.city, "city")?,
        top_encode_hashes(&profile.document_hashes),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{IdentityArgs, ValidityArgs};
    use registry_codec::utf8_to_hex;

    const ALICE: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";
    const ALICE_HEX: &str = "0139472eff6886771a982f3083da5d421f24c29181e63888228dc81ca60d69e1";
    const HASH: &str = "0x8938398938398938398938398938398938398938398938398938398938398938";

    const ABI: &str = r#"{
        "name": "IdentityRegistry",
        "endpoints": [
            {
                "name": "createIdentity",
                "mutability": "mutable",
                "inputs": [
                    { "name": "id", "type": "array32<u8>" },
                    { "name": "name", "type": "array32<u8>" },
                    { "name": "gender", "type": "u8" },
                    { "name": "birthday", "type": "array32<u8>" },
                    { "name": "nationality", "type": "array32<u8>" },
                    { "name": "province", "type": "array32<u8>" },
                    { "name": "city", "type": "array32<u8>" },
                    { "name": "document_hashes", "type": "List<array32<u8>>" }
                ],
                "outputs": []
            },
            {
                "name": "removeIdentity",
                "mutability": "mutable",
                "inputs": [],
                "outputs": []
            },
            {
                "name": "setIdentityValidity",
                "onlyOwner": true,
                "mutability": "mutable",
                "inputs": [
                    { "name": "account", "type": "Address" },
                    { "name": "valid", "type": "bool" }
                ],
                "outputs": []
            }
        ]
    }"#;

    fn identity_args() -> IdentityArgs {
        IdentityArgs {
            id: "184738199010200917".to_string(),
            name: "罗兰".to_string(),
            gender: 0,
            birthday: "1990-10-20".to_string(),
            nationality: "中国".to_string(),
            province: "上海".to_string(),
            city: "宝山".to_string(),
            document_hashes: vec![HASH.to_string()],
        }
    }

    #[test]
    fn set_validity_encodes_account_and_flag() {
        let call = CallDataCommand::SetValidity(ValidityArgs {
            account: ALICE.to_string(),
            valid: true,
        });
        assert_eq!(
            call_data(ABI, &call).unwrap(),
            format!("setIdentityValidity@{ALICE_HEX}@01")
        );
    }

    #[test]
    fn create_encodes_every_field_in_order() {
        let data = call_data(ABI, &CallDataCommand::Create(identity_args())).unwrap();
        let parts: Vec<&str> = data.split('@').collect();

        assert_eq!(parts.len(), 9);
        assert_eq!(parts[0], "createIdentity");
        let id_hex = utf8_to_hex("184738199010200917");
        assert_eq!(parts[1], format!("{:0<64}", &id_hex[2..]));
        // gender 0 top-encodes to an empty argument
        assert_eq!(parts[3], "");
        assert_eq!(parts[8], &HASH[2..]);
    }

    #[test]
    fn remove_has_no_arguments() {
        assert_eq!(call_data(ABI, &CallDataCommand::Remove).unwrap(), "removeIdentity");
    }

    #[test]
    fn malformed_account_is_an_error() {
        let call = CallDataCommand::SetValidity(ValidityArgs {
            account: "not-an-address".to_string(),
            valid: true,
        });
        let err = call_data(ABI, &call).unwrap_err();
        assert!(format!("{err:#}").contains("invalid account not-an-address"));
    }

    #[test]
    fn endpoint_missing_from_abi_is_an_error() {
        let abi = r#"{ "endpoints": [] }"#;
        let err = call_data(abi, &CallDataCommand::Modify(identity_args())).unwrap_err();
        assert!(format!("{err:#}").contains("encoding modifyIdentity call"));
    }
}
