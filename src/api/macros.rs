/// Generate one fire-and-forget `PATCH /orders/{id}/<action>` method per action.
macro_rules! impl_order_transitions {
    ($($action:ident),* $(,)?) => {
        paste::paste! {
            impl ApiClient {
                $(
                    #[tracing::instrument(skip(self))]
                    pub async fn [<$action _order>](&self, order_id: &str) -> Result<(), ApiError> {
                        self.transition_order(order_id, OrderAction::[<$action:camel>]).await
                    }
                )*
            }
        }
    };
}

/// Generate a typed `GET` method for a fixed path with no parameters.
macro_rules! impl_get_queries {
    ($(fn $method:ident() -> $response:ty = $path:literal;)*) => {
        impl ApiClient {
            $(
                #[tracing::instrument(skip(self))]
                pub async fn $method(&self) -> Result<$response, ApiError> {
                    Self::fetch(self.get($path)).await
                }
            )*
        }
    };
}
