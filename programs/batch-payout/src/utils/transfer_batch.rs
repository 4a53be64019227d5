use anchor_lang::prelude::*;
use crate::errors::PayoutError;

/// Point-in-time view of an account taking part in a batch.
///
/// `balance` is lamports for native payouts and token base units for
/// token payouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub key: Pubkey,
    pub balance: u64,
    pub data_len: usize,
    pub is_writable: bool,
    pub executable: bool,
}

impl AccountSnapshot {
    pub fn from_account_info(info: &AccountInfo) -> Self {
        Self {
            key: info.key(),
            balance: info.lamports(),
            data_len: info.data_len(),
            is_writable: info.is_writable,
            executable: info.executable,
        }
    }

    pub fn with_balance(mut self, balance: u64) -> Self {
        self.balance = balance;
        self
    }
}

struct Credit {
    account: AccountSnapshot,
    amount: u64,
}

/// Transfers from one source, staged locally and checked as a whole
/// before any of them is applied.
pub struct TransferBatch<D> {
    source: AccountSnapshot,
    total_debit: u64,
    credits: Vec<Credit>,
    transfers: Vec<(D, u64)>,
}

impl<D> TransferBatch<D> {
    pub fn new(source: AccountSnapshot) -> Self {
        Self {
            source,
            total_debit: 0,
            credits: Vec::new(),
            transfers: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    pub fn total_debit(&self) -> u64 {
        self.total_debit
    }

    /// Queues `amount` for `destination`. Credits to the same key accumulate.
    pub fn stage(&mut self, destination: D, account: AccountSnapshot, amount: u64) -> Result<()> {
        require!(!account.executable, PayoutError::TransferFailed);
        require!(
            amount == 0 || account.is_writable,
            PayoutError::TransferFailed
        );

        self.total_debit = self.total_debit
            .checked_add(amount)
            .ok_or(PayoutError::ArithmeticOverflow)?;

        match self.credits.iter_mut().find(|c| c.account.key == account.key) {
            Some(credit) => {
                credit.amount = credit.amount
                    .checked_add(amount)
                    .ok_or(PayoutError::ArithmeticOverflow)?;
            }
            None => self.credits.push(Credit { account, amount }),
        }

        self.transfers.push((destination, amount));
        Ok(())
    }

    /// Checks that every staged transfer can land. With `rent` set, every
    /// account whose balance changes must end empty or rent-exempt.
    pub fn validate(&self, rent: Option<&Rent>) -> Result<()> {
        if self.total_debit == 0 {
            return Ok(());
        }

        require!(self.source.is_writable, PayoutError::TransferFailed);
        require!(
            self.source.balance >= self.total_debit,
            PayoutError::TransferFailed
        );

        let mut source_after = self.source.balance - self.total_debit;

        for credit in &self.credits {
            if credit.account.key == self.source.key {
                source_after = source_after
                    .checked_add(credit.amount)
                    .ok_or(PayoutError::TransferFailed)?;
                continue;
            }
            if credit.amount == 0 {
                continue;
            }

            let after = credit.account.balance
                .checked_add(credit.amount)
                .ok_or(PayoutError::TransferFailed)?;

            if let Some(rent) = rent {
                require!(
                    rent.is_exempt(after, credit.account.data_len),
                    PayoutError::TransferFailed
                );
            }
        }

        if let Some(rent) = rent {
            require!(
                source_after == 0 || rent.is_exempt(source_after, self.source.data_len),
                PayoutError::TransferFailed
            );
        }

        Ok(())
    }

    /// Validates the whole batch, then applies each non-zero transfer in
    /// staging order. Nothing is applied if validation fails.
    pub fn commit<F>(self, rent: Option<&Rent>, mut apply: F) -> Result<u64>
    where
        F: FnMut(&D, u64) -> Result<()>,
    {
        self.validate(rent)?;

        for (destination, amount) in self.transfers.iter() {
            if *amount == 0 {
                continue;
            }
            apply(destination, *amount)?;
        }

        Ok(self.total_debit)
    }
}
