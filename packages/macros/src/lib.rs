use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, AttributeArgs, DataEnum, DeriveInput, Variant};

/// Appends the strategy query variants the vault relies on:
///
/// ```
/// use ovault_macros::strategy_query;
/// use cosmwasm_schema::{cw_serde, QueryResponses};
///
/// #[strategy_query]
/// #[cw_serde]
/// #[derive(QueryResponses)]
/// enum QueryMsg {}
/// ```
///
/// expands to
///
/// ```
/// enum QueryMsg {
///     /// Returns the amount of `denom` the strategy is worth, in `denom` units.
///     CheckBalance { denom: String },
///     /// Returns flag whether the strategy accepts deposits of this denom.
///     SupportsAsset { denom: String },
///     /// Returns the ordered list of reward tokens the strategy collects.
///     RewardTokenAddresses {},
///     /// Returns liquidation limits index-aligned with the reward tokens.
///     RewardLiquidationLimits {},
///     /// Returns the liquidation limit of a single reward token.
///     RewardLiquidationLimit { index: u32 },
/// }
/// ```
///
/// Place it above `cw_serde` and any derives, which need the added variants.
#[proc_macro_attribute]
pub fn strategy_query(metadata: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(metadata as AttributeArgs);
    if let Some(first_arg) = args.first() {
        return syn::Error::new_spanned(first_arg, "strategy query macro takes no arguments")
            .to_compile_error()
            .into();
    }

    let mut ast: DeriveInput = parse_macro_input!(input);
    match &mut ast.data {
        syn::Data::Enum(DataEnum { variants, .. }) => {
            let check_balance: Variant = syn::parse2(quote! {
                #[returns(cosmwasm_std::Uint128)]
                CheckBalance { denom: String }
            })
            .unwrap();

            let supports_asset: Variant = syn::parse2(quote! {
                #[returns(bool)]
                SupportsAsset { denom: String }
            })
            .unwrap();

            let reward_token_addresses: Variant = syn::parse2(quote! {
                #[returns(Vec<String>)]
                RewardTokenAddresses {}
            })
            .unwrap();

            let reward_liquidation_limits: Variant = syn::parse2(quote! {
                #[returns(Vec<cosmwasm_std::Uint128>)]
                RewardLiquidationLimits {}
            })
            .unwrap();

            let reward_liquidation_limit: Variant = syn::parse2(quote! {
                #[returns(cosmwasm_std::Uint128)]
                RewardLiquidationLimit { index: u32 }
            })
            .unwrap();

            variants.push(check_balance);
            variants.push(supports_asset);
            variants.push(reward_token_addresses);
            variants.push(reward_liquidation_limits);
            variants.push(reward_liquidation_limit);
        }
        _ => {
            return syn::Error::new(
                ast.ident.span(),
                "strategy query types can only be derived for enums",
            )
            .to_compile_error()
            .into()
        }
    };

    quote! {
    #ast
    }
    .into()
}

/// Appends the strategy execute variants the vault calls:
///
/// ```
/// use ovault_macros::strategy;
///
/// #[strategy]
/// enum ExecuteMsg {}
/// ```
///
/// expands to
///
/// ```
/// enum ExecuteMsg {
///     Deposit {},
///     Withdraw { recipient: String, denom: String, amount: u128 },
///     WithdrawAll {},
///     CollectRewardTokens {},
/// }
/// ```
///
/// Place it above `cw_serde` and any derives, which need the added variants.
#[proc_macro_attribute]
pub fn strategy(metadata: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(metadata as AttributeArgs);
    if let Some(first_arg) = args.first() {
        return syn::Error::new_spanned(first_arg, "strategy cmd macro takes no arguments")
            .to_compile_error()
            .into();
    }

    let mut ast: DeriveInput = parse_macro_input!(input);
    match &mut ast.data {
        syn::Data::Enum(DataEnum { variants, .. }) => {
            let deposit: Variant = syn::parse2(quote! { Deposit {} }).unwrap();
            let withdraw: Variant = syn::parse2(quote! {
                Withdraw {
                    recipient: String,
                    denom: String,
                    amount: cosmwasm_std::Uint128,
                }
            })
            .unwrap();
            let withdraw_all: Variant = syn::parse2(quote! { WithdrawAll {} }).unwrap();
            let collect_reward_tokens: Variant =
                syn::parse2(quote! { CollectRewardTokens {} }).unwrap();

            variants.push(deposit);
            variants.push(withdraw);
            variants.push(withdraw_all);
            variants.push(collect_reward_tokens);
        }
        _ => {
            return syn::Error::new(
                ast.ident.span(),
                "strategy cmd types can only be derived for enums",
            )
            .to_compile_error()
            .into()
        }
    };

    quote! {
    #ast
    }
    .into()
}
