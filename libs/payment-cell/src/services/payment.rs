use std::sync::Arc;

use chrono::{Datelike, Utc};
use tracing::debug;
use uuid::Uuid;

use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{
    CreatePaymentRequest, Payment, PaymentStatus, PaymentSummary, UpdatePaymentRequest,
};

pub struct PaymentService {
    payments: Arc<dyn Repository<Payment>>,
}

impl PaymentService {
    pub fn new(payments: Arc<dyn Repository<Payment>>) -> Self {
        Self { payments }
    }

    pub async fn create_payment(&self, request: CreatePaymentRequest) -> Result<Payment, AppError> {
        debug!("Recording payment for patient: {}", request.patient);

        let date = request.validate()?;

        let payment = Payment {
            id: Uuid::new_v4(),
            date,
            patient: request.patient.trim().to_string(),
            session: request.session.trim().to_string(),
            amount: request.amount,
            status: request.status,
            created_at: Utc::now(),
            updated_at: None,
        };

        let payment = self.payments.create(payment).await?;
        debug!("Payment recorded with ID: {}", payment.id);

        Ok(payment)
    }

    pub async fn update_payment(
        &self,
        payment_id: Uuid,
        request: UpdatePaymentRequest,
    ) -> Result<Payment, AppError> {
        debug!("Updating payment: {}", payment_id);

        request.validate()?;

        let mut payment = self.payments.get(payment_id).await?;

        if let Some(status) = request.status {
            payment.status = status;
        }
        if let Some(amount) = request.amount {
            payment.amount = amount;
        }
        payment.updated_at = Some(Utc::now());

        self.payments.update(payment).await
    }

    pub async fn list_payments(&self) -> Result<Vec<Payment>, AppError> {
        self.payments.list().await
    }

    /// Month / pending / received totals. The month total counts payments
    /// dated in `month` (year, month) when given, otherwise every payment.
    pub async fn summary(&self, month: Option<(i32, u32)>) -> Result<PaymentSummary, AppError> {
        let payments = self.payments.list().await?;

        let mut summary = PaymentSummary {
            month: 0.0,
            pending: 0.0,
            received: 0.0,
        };

        for payment in &payments {
            let in_month = match month {
                Some((year, month)) => payment.date.year() == year && payment.date.month() == month,
                None => true,
            };
            if in_month {
                summary.month += payment.amount;
            }
            match payment.status {
                PaymentStatus::Pending => summary.pending += payment.amount,
                PaymentStatus::Paid => summary.received += payment.amount,
                PaymentStatus::Overdue => {}
            }
        }

        Ok(summary)
    }
}
