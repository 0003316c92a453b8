/// Generate one client method per order action, each delegating to the
/// shared transition path so cache bookkeeping lives in one place.
macro_rules! impl_order_actions {
    ($client_name:ident, $($action:ident),* $(,)?) => {
        paste::paste! {
            impl $client_name {
                $(
                    #[tracing::instrument(skip(self))]
                    pub async fn [<$action _order>](&self, order_id: &str) -> Result<(), OrderError> {
                        tracing::debug!("Sending request");
                        self.transition(order_id, OrderAction::[<$action:camel>]).await
                    }
                )*
            }
        }
    };
}
