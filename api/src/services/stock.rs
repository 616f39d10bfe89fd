//! Asynchronous stock reconciliation.
//!
//! Recording a sale enqueues a decrement job here and returns immediately;
//! the worker drains the queue out of band. Callers must not assume stock has
//! been decremented by the time they see the HTTP response, and worker
//! failures are never reported back to the request that enqueued the job.

use db::models::product;
use sea_orm::DatabaseConnection;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// A pending stock decrement for one recorded sale.
#[derive(Debug)]
pub struct StockJob {
    pub product_id: i64,
    pub quantity: i32,
}

/// Handle for enqueueing stock-reconciliation jobs.
///
/// Cheap to clone; all clones feed the single worker task spawned by
/// [`StockQueue::spawn`].
#[derive(Clone)]
pub struct StockQueue {
    tx: mpsc::UnboundedSender<StockJob>,
}

impl StockQueue {
    /// Spawns the worker task and returns the queue handle.
    ///
    /// The worker applies each job as one atomic column update
    /// (`stock = stock - quantity`). The sufficiency check made when the sale
    /// was recorded is not re-run here, so concurrent sales that both passed
    /// it can drive stock below zero — the storage-level decrement itself
    /// never loses updates.
    pub fn spawn(db: DatabaseConnection) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<StockJob>();

        tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                match product::Model::decrement_stock(&db, job.product_id, job.quantity).await {
                    Ok(0) => warn!(
                        product_id = job.product_id,
                        quantity = job.quantity,
                        "stock decrement matched no product; dropping job"
                    ),
                    Ok(_) => debug!(
                        product_id = job.product_id,
                        quantity = job.quantity,
                        "stock decremented"
                    ),
                    Err(e) => warn!(
                        error = %e,
                        product_id = job.product_id,
                        quantity = job.quantity,
                        "stock decrement failed"
                    ),
                }
            }
        });

        Self { tx }
    }

    /// Fire-and-forget enqueue.
    pub fn enqueue(&self, product_id: i64, quantity: i32) {
        let job = StockJob {
            product_id,
            quantity,
        };
        if self.tx.send(job).is_err() {
            warn!(product_id, quantity, "stock worker is gone; dropping job");
        }
    }
}
