use cosmwasm_std::{attr, Attribute, Event, Response};

pub fn response<A: Into<Attribute>, T>(
    ty: &str,
    contract_name: &str,
    attrs: impl IntoIterator<Item = A>,
) -> Response<T> {
    Response::<T>::new()
        .add_event(Event::new(format!("{}-{}", contract_name, ty)).add_attributes(attrs))
}

pub fn attr_coin(
    key: impl Into<String>,
    amount: impl std::fmt::Display,
    denom: impl std::fmt::Display,
) -> Attribute {
    attr(key, format!("{}{}", amount, denom))
}

/// Renders a list as `[a,b,c]` so old/new value pairs fit in one attribute.
pub fn attr_list<T: std::fmt::Display>(
    key: impl Into<String>,
    items: impl IntoIterator<Item = T>,
) -> Attribute {
    let joined = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",");
    attr(key, format!("[{}]", joined))
}

#[test]
fn test_attr_list() {
    assert_eq!(attr_list("limits", [1u64, 2, 3]), attr("limits", "[1,2,3]"));
    assert_eq!(attr_list("limits", Vec::<u64>::new()), attr("limits", "[]"));
}
