#[macro_export]
macro_rules! opt {
    (, $default:ident) => {
        $default
    };
    ($optional:expr, $default:ident) => {
        $optional
    };
}

#[macro_export]
macro_rules! params_internal {
    ($vec:ident, required, $key:expr, $val:expr) => {
        $vec.push(($key, $val.to_string()));
    };
    ($vec:ident, optional, $key:expr, $val:expr) => {
        if let Some(ref v) = $val {
            $vec.push(($key, v.to_string()));
        }
    };
}

/// Build the query pairs of an API request as `Vec<(String, String)>`.
/// A bare name takes the value of the variable with the same name. Example:
/// ```
/// use waifu_util::build_params;
///
/// let included_tags = "maid";
/// let height: Option<u32> = None;
/// let params = build_params! {
///     required included_tags,
///     required is_nsfw => false,
///     optional height,
/// };
/// assert_eq!(params.len(), 2);
/// ```
#[macro_export]
macro_rules! build_params {
    (
        $(
            $kind:ident $name:ident $( => $val:expr )?
        ),+ $(,)?
    ) => {
        {
            let mut params: Vec<(String, String)> = Vec::new();
            $(
                $crate::params_internal!(
                    params,
                    $kind,
                    stringify!($name).to_string(),
                    $crate::opt!($( $val )?, $name)
                );
            )+
            params
        }
    };
}

#[cfg(test)]
mod test {
    #[test]
    fn test_build_params() {
        let category = "waifu";
        let limit: Option<u32> = Some(3);
        let page: Option<u32> = None;
        let params = build_params! {
            required category,
            required full => true,
            optional limit,
            optional page,
        };
        assert_eq!(
            params,
            vec![
                ("category".to_string(), "waifu".to_string()),
                ("full".to_string(), "true".to_string()),
                ("limit".to_string(), "3".to_string()),
            ]
        );
    }
}
