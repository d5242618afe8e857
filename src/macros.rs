/// Binds a model to the CSV file it is loaded from.
///
/// # Example
///
/// ```ignore
/// define_table!("channel_stats.csv" : ChannelStats requires [ChannelName, SubscriberCount, ViewCount]);
///
/// let channels: Vec<ChannelStats> = dataset::read_table(&data_dir)?;
/// ```
#[macro_export]
macro_rules! define_table {
    ($file:literal : $model:ident requires [$($column:ident),* $(,)?]) => {
        impl $crate::dataset::Table for $model {
            fn file() -> &'static str {
                $file
            }

            fn required() -> &'static [$crate::model::Field] {
                &[$($crate::model::Field::$column),*]
            }
        }
    };
}

/// Defines which chart fields a model can provide and how to read them.
///
/// # Syntax
/// ```text
/// [Model] : self { Field => getter, ... }
/// ```
/// Each getter must convert into a [Cell](crate::model::Cell). Fields that are not listed are reported as absent.
///
/// # Example
///
/// ```ignore
/// define_row! {
///     ChannelStats : self {
///         ChannelName => self.channel_name.as_str(),
///         SubscriberCount => self.subscriber_count,
///     }
/// }
///
/// let cell = channel.cell(Field::SubscriberCount);
/// ```
#[macro_export]
macro_rules! define_row {
    ($model:ty : $self:ident { $($field:ident => $getter:expr),* $(,)? }) => {
        impl $crate::model::Row for $model {
            #[allow(unreachable_patterns)]
            fn cell(&$self, field: $crate::model::Field) -> Option<$crate::model::Cell> {
                match field {
                    $($crate::model::Field::$field => Some(::std::convert::Into::into($getter)),)*
                    _ => None,
                }
            }
        }
    };
}
