use super::prepare::PreparedOperation;

/// Normalize the HTTP method of every operation to lower case, e.g. `GET` → `get`.
///
/// Order and every other field are left untouched.
pub fn lowercase_http_methods(operations: &mut [PreparedOperation]) {
    for op in operations.iter_mut() {
        op.http_method = op.http_method.to_lowercase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(index: usize, id: &str, method: &str) -> PreparedOperation {
        PreparedOperation {
            index,
            operation_id: id.to_string(),
            original_id: id.to_string(),
            http_method: method.to_string(),
            path: "/pets".to_string(),
            summary: None,
            description: None,
            parameters: Vec::new(),
            has_optional_params: false,
            return_spec: None,
            tags: vec!["pets".to_string()],
        }
    }

    #[test]
    fn test_lowercases_methods() {
        let mut ops = vec![op(0, "a", "GET"), op(1, "b", "Post"), op(2, "c", "delete")];
        lowercase_http_methods(&mut ops);
        let methods: Vec<&str> = ops.iter().map(|o| o.http_method.as_str()).collect();
        assert_eq!(methods, vec!["get", "post", "delete"]);
    }

    #[test]
    fn test_keeps_order_and_fields() {
        let mut ops = vec![op(0, "b", "PUT"), op(1, "a", "PATCH")];
        let before = ops.clone();
        lowercase_http_methods(&mut ops);
        for (after, before) in ops.iter().zip(&before) {
            assert_eq!(after.index, before.index);
            assert_eq!(after.operation_id, before.operation_id);
            assert_eq!(after.tags, before.tags);
        }
    }
}
