use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("donor name is required")]
    MissingDonor,
    #[error("donation amount must be positive, got {0}")]
    InvalidAmount(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub donor_name: String,
    pub amount: f64,
    pub donation_date: NaiveDate,
}

/// The aggregate the donation summary view maintains over the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationSummary {
    pub total_donors: usize,
    pub total_raised: f64,
    pub avg_donation: f64,
    pub last_donation_date: Option<NaiveDate>,
}

/// Append-only donation ledger with an on-demand summary. The refresh
/// cadence a materialized view would add is the host platform's concern;
/// here the aggregate is simply recomputed per call.
#[derive(Debug, Default)]
pub struct DonationLedger {
    donations: Vec<Donation>,
}

impl DonationLedger {
    pub fn new() -> Self {
        Self {
            donations: Vec::new(),
        }
    }

    /// The three seed rows the demo starts with.
    pub fn seeded(today: NaiveDate) -> Self {
        Self {
            donations: vec![
                Donation {
                    donor_name: "Alice Smith".to_string(),
                    amount: 100.0,
                    donation_date: today,
                },
                Donation {
                    donor_name: "Bob Jones".to_string(),
                    amount: 250.0,
                    donation_date: today,
                },
                Donation {
                    donor_name: "Carol White".to_string(),
                    amount: 50.0,
                    donation_date: today,
                },
            ],
        }
    }

    pub fn add(
        &mut self,
        donor_name: &str,
        amount: f64,
        donation_date: NaiveDate,
    ) -> Result<(), LedgerError> {
        if donor_name.trim().is_empty() {
            return Err(LedgerError::MissingDonor);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        self.donations.push(Donation {
            donor_name: donor_name.to_string(),
            amount,
            donation_date,
        });
        Ok(())
    }

    pub fn donations(&self) -> &[Donation] {
        &self.donations
    }

    pub fn summary(&self) -> DonationSummary {
        let total_donors = self.donations.len();
        let total_raised: f64 = self.donations.iter().map(|d| d.amount).sum();
        let avg_donation = if total_donors > 0 {
            ((total_raised / total_donors as f64) * 100.0).round() / 100.0
        } else {
            0.0
        };
        let last_donation_date = self.donations.iter().map(|d| d.donation_date).max();

        DonationSummary {
            total_donors,
            total_raised,
            avg_donation,
            last_donation_date,
        }
    }
}
