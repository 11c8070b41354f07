use crate::utils::{is_identifier, to_screaming_snake_case, upper_first};

#[test]
fn upper_first_keeps_rest() {
    assert_eq!(upper_first("gCOTI"), "GCOTI");
    assert_eq!(upper_first("token"), "Token");
    assert_eq!(upper_first("MyToken"), "MyToken");
    assert_eq!(upper_first(""), "");
}

#[test]
fn screaming_snake_from_pascal() {
    assert_eq!(to_screaming_snake_case("MyToken"), "MY_TOKEN");
    assert_eq!(to_screaming_snake_case("Token"), "TOKEN");
    assert_eq!(to_screaming_snake_case("myTokenV2"), "MY_TOKEN_V2");
}

#[test]
fn screaming_snake_keeps_acronyms() {
    assert_eq!(to_screaming_snake_case("GCOTI"), "GCOTI");
    assert_eq!(to_screaming_snake_case("ERC20Token"), "ERC20_TOKEN");
    assert_eq!(to_screaming_snake_case("HTTPServer"), "HTTP_SERVER");
}

#[test]
fn screaming_snake_from_separated() {
    assert_eq!(to_screaming_snake_case("my-token"), "MY_TOKEN");
    assert_eq!(to_screaming_snake_case("my_token"), "MY_TOKEN");
    assert_eq!(to_screaming_snake_case("_my__token_"), "MY_TOKEN");
}

#[test]
fn identifiers() {
    assert!(is_identifier("amount"));
    assert!(is_identifier("_owner"));
    assert!(is_identifier("$value1"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("1st"));
    assert!(!is_identifier("with space"));
}
