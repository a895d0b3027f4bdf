use std::fmt::Display;

use cosmwasm_std::{Coin, QuerierWrapper, StdResult, Uint128};
use ovault_base::{
    msg::{
        token::{BalanceResponse, QueryMsg as TokenQueryMsg},
        vault::{ExecuteMsg, QueryMsg},
    },
    state::vault::{Config, SupportedAsset},
};
use tracing::{error, info, warn};

use crate::{
    error::{ClientError, ClientResult},
    format::{format_currency, format_units, parse_units},
    transactions::{PendingTransaction, TransactionStore},
};

/// Read access to a deployed vault.
pub trait VaultView {
    fn stable_balance(&self, owner: &str) -> StdResult<Uint128>;
    fn assets(&self) -> StdResult<Vec<SupportedAsset>>;
    /// Index-aligned with `assets`.
    fn redeem_outputs(&self, amount: Uint128) -> StdResult<Vec<Coin>>;
}

pub struct QuerierVault<'a> {
    querier: QuerierWrapper<'a>,
    vault: String,
    stable_token: String,
}

impl<'a> QuerierVault<'a> {
    pub fn new(querier: QuerierWrapper<'a>, vault: impl Into<String>) -> StdResult<Self> {
        let vault = vault.into();
        let config: Config = querier.query_wasm_smart(&vault, &QueryMsg::Config {})?;
        Ok(QuerierVault {
            querier,
            vault,
            stable_token: config.stable_token.to_string(),
        })
    }

    pub fn vault(&self) -> &str {
        &self.vault
    }
}

impl VaultView for QuerierVault<'_> {
    fn stable_balance(&self, owner: &str) -> StdResult<Uint128> {
        let response: BalanceResponse = self.querier.query_wasm_smart(
            &self.stable_token,
            &TokenQueryMsg::Balance {
                address: owner.to_string(),
            },
        )?;
        Ok(response.balance)
    }

    fn assets(&self) -> StdResult<Vec<SupportedAsset>> {
        self.querier
            .query_wasm_smart(&self.vault, &QueryMsg::AllAssets {})
    }

    fn redeem_outputs(&self, amount: Uint128) -> StdResult<Vec<Coin>> {
        self.querier
            .query_wasm_smart(&self.vault, &QueryMsg::CalculateRedeemOutputs { amount })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmittedTransaction {
    pub hash: String,
    pub from: String,
    pub chain_id: String,
}

/// Signs and broadcasts a vault message.
pub trait TransactionSubmitter {
    type Error: Display;

    fn submit(
        &mut self,
        vault: &str,
        msg: &ExecuteMsg,
    ) -> Result<SubmittedTransaction, Self::Error>;
}

/// One coin of a redemption quote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoinSplit {
    pub denom: String,
    pub amount: Uint128,
    /// Human units, e.g. `"500.0"`.
    pub display: String,
}

pub fn split_outputs(
    assets: &[SupportedAsset],
    outputs: Vec<Coin>,
) -> ClientResult<Vec<CoinSplit>> {
    assets
        .iter()
        .zip(outputs)
        .map(|(asset, output)| {
            Ok(CoinSplit {
                display: format_units(output.amount, asset.decimals)?,
                denom: output.denom,
                amount: output.amount,
            })
        })
        .collect()
}

fn quote_split(vault: &impl VaultView, amount: Uint128) -> ClientResult<Vec<CoinSplit>> {
    let assets = vault.assets()?;
    split_outputs(&assets, vault.redeem_outputs(amount)?)
}

/// State of the sell form: the amount of stable token to redeem, the quoted
/// split across vault assets and the submission.
#[derive(Debug)]
pub struct SellWidget {
    decimals: u8,
    amount: String,
    balance: Uint128,
    sell_all: bool,
    split: Vec<CoinSplit>,
    calculating: bool,
    quote_generation: u64,
    form_error: Option<&'static str>,
}

impl SellWidget {
    /// `decimals` of the stable token.
    pub fn new(decimals: u8) -> Self {
        SellWidget {
            decimals,
            amount: String::new(),
            balance: Uint128::zero(),
            sell_all: false,
            split: vec![],
            calculating: false,
            quote_generation: 0,
            form_error: None,
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn balance(&self) -> Uint128 {
        self.balance
    }

    pub fn sell_all(&self) -> bool {
        self.sell_all
    }

    pub fn split(&self) -> &[CoinSplit] {
        &self.split
    }

    pub fn is_calculating(&self) -> bool {
        self.calculating
    }

    pub fn form_error(&self) -> Option<&'static str> {
        self.form_error
    }

    /// Entered amount in base units; `None` while the input does not parse.
    pub fn amount_units(&self) -> Option<Uint128> {
        parse_units(&self.amount, self.decimals).ok()
    }

    pub fn set_amount(&mut self, input: &str) {
        let value = input.trim().replace(',', "");
        self.amount = if value.starts_with('-') {
            "0".to_string()
        } else {
            value
        };
        self.sell_all = false;
        self.supersede_quotes();
        self.validate();
    }

    pub fn set_balance(&mut self, balance: Uint128) -> ClientResult<()> {
        self.balance = balance;
        if self.sell_all {
            self.amount = format_units(balance, self.decimals)?;
            self.supersede_quotes();
        }
        self.validate();
        Ok(())
    }

    pub fn refresh_balance(&mut self, vault: &impl VaultView, owner: &str) -> ClientResult<()> {
        self.set_balance(vault.stable_balance(owner)?)
    }

    /// Returns whether sell-all is now on.
    pub fn toggle_sell_all(&mut self) -> ClientResult<bool> {
        self.sell_all = !self.sell_all;
        if self.sell_all {
            self.amount = format_units(self.balance, self.decimals)?;
            self.supersede_quotes();
        }
        self.validate();
        Ok(self.sell_all)
    }

    /// Any quote still in flight was asked for an amount that is no longer
    /// entered.
    fn supersede_quotes(&mut self) {
        self.quote_generation += 1;
        self.calculating = false;
    }

    fn validate(&mut self) {
        self.form_error = match self.amount_units() {
            Some(amount) if amount > self.balance => Some("not_have_enough"),
            _ => None,
        };
    }

    /// Balance left after the sale, formatted for display.
    pub fn remaining_balance(&self) -> ClientResult<String> {
        let selling = self.amount_units().unwrap_or_default();
        let remaining = self.balance.saturating_sub(selling);
        format_currency(&format_units(remaining, self.decimals)?, 6)
    }

    /// Starts a quote for the entered amount. Returns the generation to pass
    /// to `complete_quote` and the amount to quote, or `None` when there is
    /// nothing to quote (the split is cleared).
    pub fn begin_quote(&mut self) -> Option<(u64, Uint128)> {
        match self.amount_units() {
            Some(amount) if !amount.is_zero() => {
                self.quote_generation += 1;
                self.calculating = true;
                Some((self.quote_generation, amount))
            }
            _ => {
                self.supersede_quotes();
                self.split.clear();
                None
            }
        }
    }

    /// Applies a quote result. Results of superseded quotes are dropped and
    /// `false` is returned; a failed quote clears the split.
    pub fn complete_quote(
        &mut self,
        generation: u64,
        result: ClientResult<Vec<CoinSplit>>,
    ) -> bool {
        if generation != self.quote_generation {
            return false;
        }
        self.calculating = false;
        match result {
            Ok(split) => self.split = split,
            Err(err) => {
                warn!("redeem quote failed: {}", err);
                self.split.clear();
            }
        }
        true
    }

    pub fn quote(&mut self, vault: &impl VaultView) -> bool {
        let Some((generation, amount)) = self.begin_quote() else {
            return false;
        };
        let result = quote_split(vault, amount);
        self.complete_quote(generation, result)
    }

    fn redeem_msg(&self) -> ClientResult<ExecuteMsg> {
        if self.form_error.is_some() {
            return Err(ClientError::NotHaveEnough {});
        }
        if self.sell_all {
            if self.balance.is_zero() {
                return Err(ClientError::NothingToSell {});
            }
            return Ok(ExecuteMsg::RedeemAll { min_output: None });
        }
        let amount = parse_units(&self.amount, self.decimals)?;
        if amount.is_zero() {
            return Err(ClientError::NothingToSell {});
        }
        Ok(ExecuteMsg::Redeem {
            amount,
            min_output: None,
        })
    }

    /// Submits the redemption. A successful submission is staged in `store`
    /// with the denoms the quote pays out as its data; a failed one is
    /// recorded there.
    pub fn sell_now<S: TransactionSubmitter>(
        &mut self,
        vault: &str,
        submitter: &mut S,
        store: &mut TransactionStore,
    ) -> ClientResult<String> {
        let msg = self.redeem_msg()?;
        let coins = self
            .split
            .iter()
            .filter(|split| !split.amount.is_zero())
            .map(|split| split.denom.as_str())
            .collect::<Vec<_>>()
            .join(",");
        match submitter.submit(vault, &msg) {
            Ok(tx) => {
                info!(hash = %tx.hash, coins = %coins, "redeem submitted");
                let hash = tx.hash.clone();
                store.stage(PendingTransaction::new(
                    tx.hash,
                    tx.from,
                    tx.chain_id,
                    "redeem",
                    Some(coins),
                ));
                Ok(hash)
            }
            Err(err) => {
                error!("redeem submission failed: {}", err);
                let error = err.to_string();
                store.record_error("redeem", &error);
                Err(ClientError::Submission { error })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{coin, Addr, Empty, StdError};
    use cw_multi_test::{custom_app, App, Contract, ContractWrapper, Executor};
    use ovault_base::msg::{
        token::InstantiateMsg as TokenInstantiateMsg, vault::InstantiateMsg as VaultInstantiateMsg,
    };

    const E18: u128 = 1_000_000_000_000_000_000;
    const ANNA: &str = "anna";

    struct FixedVault {
        outputs: Option<Vec<Coin>>,
    }

    impl VaultView for FixedVault {
        fn stable_balance(&self, _owner: &str) -> StdResult<Uint128> {
            Ok(Uint128::new(100 * E18))
        }

        fn assets(&self) -> StdResult<Vec<SupportedAsset>> {
            Ok(vec![
                SupportedAsset {
                    denom: "udai".to_string(),
                    decimals: 18,
                },
                SupportedAsset {
                    denom: "uusdc".to_string(),
                    decimals: 6,
                },
            ])
        }

        fn redeem_outputs(&self, _amount: Uint128) -> StdResult<Vec<Coin>> {
            self.outputs
                .clone()
                .ok_or_else(|| StdError::generic_err("vault unreachable"))
        }
    }

    #[derive(Default)]
    struct RecordingSubmitter {
        fail: bool,
        submitted: Vec<ExecuteMsg>,
    }

    impl TransactionSubmitter for RecordingSubmitter {
        type Error = String;

        fn submit(
            &mut self,
            _vault: &str,
            msg: &ExecuteMsg,
        ) -> Result<SubmittedTransaction, String> {
            if self.fail {
                return Err("user rejected".to_string());
            }
            self.submitted.push(msg.clone());
            Ok(SubmittedTransaction {
                hash: format!("TX{}", self.submitted.len()),
                from: ANNA.to_string(),
                chain_id: "testnet-1".to_string(),
            })
        }
    }

    fn widget_with_balance() -> SellWidget {
        let mut widget = SellWidget::new(18);
        widget.set_balance(Uint128::new(100 * E18)).unwrap();
        widget
    }

    #[test]
    fn amount_entry() {
        let mut widget = widget_with_balance();
        widget.set_amount("1,000");
        assert_eq!(widget.amount(), "1000");
        assert_eq!(widget.form_error(), Some("not_have_enough"));

        widget.set_amount("-5");
        assert_eq!(widget.amount(), "0");
        assert_eq!(widget.form_error(), None);

        widget.set_amount("40.5");
        assert_eq!(widget.amount_units(), Some(Uint128::new(40_500_000_000_000_000_000)));
        assert_eq!(widget.remaining_balance().unwrap(), "59.500000");
    }

    #[test]
    fn sell_all_follows_balance() {
        let mut widget = widget_with_balance();
        widget.set_amount("10");
        assert!(widget.toggle_sell_all().unwrap());
        assert_eq!(widget.amount(), "100.0");
        assert_eq!(widget.remaining_balance().unwrap(), "0.000000");

        widget.set_balance(Uint128::new(2_500 * E18)).unwrap();
        assert_eq!(widget.amount(), "2500.0");

        widget.set_amount("5");
        assert!(!widget.sell_all());
        assert!(widget.toggle_sell_all().unwrap());
        assert!(!widget.toggle_sell_all().unwrap());
        assert_eq!(widget.amount(), "2500.0");
    }

    #[test]
    fn stale_quotes_are_ignored() {
        let mut widget = widget_with_balance();
        widget.set_amount("10");
        let (first, _) = widget.begin_quote().unwrap();
        widget.set_amount("20");
        let (second, amount) = widget.begin_quote().unwrap();
        assert_eq!(amount, Uint128::new(20 * E18));
        assert!(widget.is_calculating());

        let split = vec![CoinSplit {
            denom: "uusdc".to_string(),
            amount: Uint128::new(20_000_000),
            display: "20.0".to_string(),
        }];
        assert!(widget.complete_quote(second, Ok(split.clone())));
        assert!(!widget.complete_quote(first, Ok(vec![])));
        assert_eq!(widget.split(), split.as_slice());
        assert!(!widget.is_calculating());
    }

    fn usdc_split(amount: u128) -> Vec<CoinSplit> {
        vec![CoinSplit {
            denom: "uusdc".to_string(),
            amount: Uint128::new(amount),
            display: format_units(Uint128::new(amount), 6).unwrap(),
        }]
    }

    #[test]
    fn clearing_the_amount_drops_running_quote() {
        let mut widget = widget_with_balance();
        widget.set_amount("10");
        let (generation, _) = widget.begin_quote().unwrap();

        widget.set_amount("");
        assert_eq!(widget.begin_quote(), None);
        assert!(!widget.complete_quote(generation, Ok(usdc_split(10_000_000))));
        assert!(widget.split().is_empty());
        assert!(!widget.is_calculating());

        widget.set_amount("10");
        let (generation, _) = widget.begin_quote().unwrap();
        widget.set_amount("0");
        assert!(!widget.complete_quote(generation, Ok(usdc_split(10_000_000))));
        assert!(widget.split().is_empty());
    }

    #[test]
    fn sell_all_changes_drop_running_quote() {
        let mut widget = widget_with_balance();
        widget.set_amount("10");
        let (generation, _) = widget.begin_quote().unwrap();
        assert!(widget.toggle_sell_all().unwrap());
        assert!(!widget.complete_quote(generation, Ok(usdc_split(10_000_000))));
        assert!(widget.split().is_empty());

        let (generation, amount) = widget.begin_quote().unwrap();
        assert_eq!(amount, Uint128::new(100 * E18));
        widget.set_balance(Uint128::new(50 * E18)).unwrap();
        assert_eq!(widget.amount(), "50.0");
        assert!(!widget.complete_quote(generation, Ok(usdc_split(100_000_000))));
        assert!(widget.split().is_empty());

        let (generation, _) = widget.begin_quote().unwrap();
        assert!(widget.complete_quote(generation, Ok(usdc_split(50_000_000))));
        assert_eq!(widget.split(), usdc_split(50_000_000).as_slice());
    }

    #[test]
    fn zero_payouts_are_left_out_of_the_record() {
        let mut widget = widget_with_balance();
        let mut store = TransactionStore::new();
        let mut submitter = RecordingSubmitter::default();
        widget.set_amount("10");
        widget.quote(&FixedVault {
            outputs: Some(vec![coin(4 * E18, "udai"), coin(6_000_000, "uusdc")]),
        });
        widget.sell_now("vault", &mut submitter, &mut store).unwrap();

        widget.quote(&FixedVault {
            outputs: Some(vec![coin(10 * E18, "udai"), coin(0, "uusdc")]),
        });
        widget.sell_now("vault", &mut submitter, &mut store).unwrap();

        assert_eq!(store.staged()[0].data, Some("udai,uusdc".to_string()));
        assert_eq!(store.staged()[1].data, Some("udai".to_string()));
    }

    #[test]
    fn failed_quote_clears_split() {
        let mut widget = widget_with_balance();
        widget.set_amount("10");
        let vault = FixedVault {
            outputs: Some(vec![coin(4 * E18, "udai"), coin(6_000_000, "uusdc")]),
        };
        assert!(widget.quote(&vault));
        assert_eq!(widget.split().len(), 2);
        assert_eq!(widget.split()[0].display, "4.0");
        assert_eq!(widget.split()[1].display, "6.0");

        let broken = FixedVault { outputs: None };
        assert!(widget.quote(&broken));
        assert!(widget.split().is_empty());

        widget.set_amount("0");
        assert!(!widget.quote(&vault));
    }

    #[test]
    fn sell_now_stages_transaction() {
        let mut widget = widget_with_balance();
        let mut store = TransactionStore::new();
        let mut submitter = RecordingSubmitter::default();
        widget.set_amount("10");
        widget.quote(&FixedVault {
            outputs: Some(vec![coin(0, "udai"), coin(10_000_000, "uusdc")]),
        });

        let hash = widget.sell_now("vault", &mut submitter, &mut store).unwrap();
        assert_eq!(hash, "TX1");
        assert_eq!(
            submitter.submitted,
            vec![ExecuteMsg::Redeem {
                amount: Uint128::new(10 * E18),
                min_output: None
            }]
        );
        assert_eq!(store.staged()[0].kind, "redeem");
        assert_eq!(store.staged()[0].data, Some("uusdc".to_string()));

        widget.toggle_sell_all().unwrap();
        widget.sell_now("vault", &mut submitter, &mut store).unwrap();
        assert_eq!(
            submitter.submitted[1],
            ExecuteMsg::RedeemAll { min_output: None }
        );
        assert_eq!(store.merge_staged(), 2);
    }

    #[test]
    fn sell_now_failures() {
        let mut widget = widget_with_balance();
        let mut store = TransactionStore::new();
        let mut submitter = RecordingSubmitter {
            fail: true,
            ..Default::default()
        };

        widget.set_amount("1000");
        assert_eq!(
            widget.sell_now("vault", &mut submitter, &mut store),
            Err(ClientError::NotHaveEnough {})
        );
        widget.set_amount("");
        assert!(matches!(
            widget.sell_now("vault", &mut submitter, &mut store),
            Err(ClientError::InvalidNumber { .. })
        ));
        widget.set_amount("0");
        assert_eq!(
            widget.sell_now("vault", &mut submitter, &mut store),
            Err(ClientError::NothingToSell {})
        );

        widget.set_amount("1");
        assert_eq!(
            widget.sell_now("vault", &mut submitter, &mut store),
            Err(ClientError::Submission {
                error: "user rejected".to_string()
            })
        );
        assert!(store.staged().is_empty());
        assert_eq!(store.errors()[0].error, "user rejected");
    }

    fn vault_contract() -> Box<dyn Contract<Empty>> {
        Box::new(ContractWrapper::new(
            ovault_vault::contract::execute,
            ovault_vault::contract::instantiate,
            ovault_vault::contract::query,
        ))
    }

    fn token_contract() -> Box<dyn Contract<Empty>> {
        Box::new(ContractWrapper::new(
            ovault_token::contract::execute,
            ovault_token::contract::instantiate,
            ovault_token::contract::query,
        ))
    }

    struct AppSubmitter<'a> {
        app: &'a mut App,
        sender: Addr,
    }

    impl TransactionSubmitter for AppSubmitter<'_> {
        type Error = anyhow::Error;

        fn submit(
            &mut self,
            vault: &str,
            msg: &ExecuteMsg,
        ) -> anyhow::Result<SubmittedTransaction> {
            self.app
                .execute_contract(self.sender.clone(), Addr::unchecked(vault), msg, &[])?;
            Ok(SubmittedTransaction {
                hash: format!("{}-{}", self.app.block_info().height, self.sender),
                from: self.sender.to_string(),
                chain_id: self.app.block_info().chain_id,
            })
        }
    }

    #[test]
    fn sells_against_deployed_vault() {
        let mut app: App = custom_app(|r, _a, s| {
            r.bank
                .init_balance(s, &Addr::unchecked(ANNA), vec![coin(1_000_000_000, "uusdc")])
                .unwrap();
        });
        let vault_code = app.store_code(vault_contract());
        let token_code = app.store_code(token_contract());
        let vault = app
            .instantiate_contract(
                vault_code,
                Addr::unchecked("governor"),
                &VaultInstantiateMsg {
                    owner: "governor".to_string(),
                    stable_token: "contract1".to_string(),
                    strategist: None,
                    swap_router: None,
                    assets: vec![
                        SupportedAsset {
                            denom: "udai".to_string(),
                            decimals: 18,
                        },
                        SupportedAsset {
                            denom: "uusdc".to_string(),
                            decimals: 6,
                        },
                    ],
                },
                &[],
                "vault",
                None,
            )
            .unwrap();
        app.instantiate_contract(
            token_code,
            Addr::unchecked("governor"),
            &TokenInstantiateMsg {
                vault: vault.to_string(),
                name: "Vault Dollar".to_string(),
                symbol: "VUSD".to_string(),
                decimals: 18,
            },
            &[],
            "stable token",
            None,
        )
        .unwrap();
        app.execute_contract(
            Addr::unchecked(ANNA),
            vault.clone(),
            &ExecuteMsg::Mint {
                min_minted: Uint128::zero(),
            },
            &[coin(1_000_000_000, "uusdc")],
        )
        .unwrap();

        let mut widget = SellWidget::new(18);
        {
            let view = QuerierVault::new(app.wrap(), vault.as_str()).unwrap();
            widget.refresh_balance(&view, ANNA).unwrap();
            widget.set_amount("500");
            assert!(widget.quote(&view));
        }
        assert_eq!(widget.balance(), Uint128::new(1_000 * E18));
        assert_eq!(
            widget.split(),
            &[
                CoinSplit {
                    denom: "udai".to_string(),
                    amount: Uint128::zero(),
                    display: "0.0".to_string(),
                },
                CoinSplit {
                    denom: "uusdc".to_string(),
                    amount: Uint128::new(500_000_000),
                    display: "500.0".to_string(),
                },
            ]
        );

        let mut store = TransactionStore::new();
        let mut submitter = AppSubmitter {
            app: &mut app,
            sender: Addr::unchecked(ANNA),
        };
        widget
            .sell_now(vault.as_str(), &mut submitter, &mut store)
            .unwrap();
        store.merge_staged();
        assert_eq!(store.transactions()[0].data, Some("uusdc".to_string()));

        let balance = app
            .wrap()
            .query_balance(ANNA, "uusdc")
            .unwrap();
        assert_eq!(balance.amount, Uint128::new(500_000_000));
        let view = QuerierVault::new(app.wrap(), vault.as_str()).unwrap();
        assert_eq!(view.stable_balance(ANNA).unwrap(), Uint128::new(500 * E18));
    }
}
