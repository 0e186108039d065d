//
//  apim-cli
//  template/expressions.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! ARM expression formatting.
//!
//! Emitted resource names and `dependsOn` entries are ARM template expressions
//! built around the `apimServiceName` parameter, so the same template deploys
//! against any target service. The formats here are the only places these
//! expressions are assembled; every extractor goes through them.

use super::parameter_names;

/// Name expression for a resource directly under the service.
///
/// # Example
///
/// ```rust
/// use apim_cli::template::expressions::service_scoped_name;
///
/// assert_eq!(
///     service_scoped_name("starter"),
///     "[concat(parameters('apimServiceName'), '/starter')]"
/// );
/// ```
pub fn service_scoped_name(name: &str) -> String {
    format!(
        "[concat(parameters('{}'), '/{}')]",
        parameter_names::APIM_SERVICE_NAME,
        name
    )
}

/// Name expression for a resource nested one level under a service child.
///
/// Used for product attachments: `<service>/<product>/<child>`.
///
/// # Example
///
/// ```rust
/// use apim_cli::template::expressions::nested_scoped_name;
///
/// assert_eq!(
///     nested_scoped_name("starter", "billing"),
///     "[concat(parameters('apimServiceName'), '/starter/billing')]"
/// );
/// ```
pub fn nested_scoped_name(parent: &str, child: &str) -> String {
    format!(
        "[concat(parameters('{}'), '/{}/{}')]",
        parameter_names::APIM_SERVICE_NAME,
        parent,
        child
    )
}

/// `resourceId` expression for a product.
///
/// Product attachments (policy, tags, groups) list this expression in their
/// `dependsOn` so they deploy after the product itself.
pub fn product_resource_id(product_name: &str) -> String {
    format!(
        "[resourceId('Microsoft.ApiManagement/service/products', parameters('{}'), '{}')]",
        parameter_names::APIM_SERVICE_NAME,
        product_name
    )
}

/// Value expression for a policy body published as a file.
///
/// Concatenates the policy base-URL parameter with the file name and, when
/// the deployment uses one, the SAS token parameter.
pub fn policy_file_link(file_name: &str, with_sas_token: bool) -> String {
    if with_sas_token {
        format!(
            "[concat(parameters('{}'), '/{}', parameters('{}'))]",
            parameter_names::POLICY_XML_BASE_URL,
            file_name,
            parameter_names::POLICY_XML_SAS_TOKEN
        )
    } else {
        format!(
            "[concat(parameters('{}'), '/{}')]",
            parameter_names::POLICY_XML_BASE_URL,
            file_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_scoped_name() {
        assert_eq!(
            service_scoped_name("unlimited"),
            "[concat(parameters('apimServiceName'), '/unlimited')]"
        );
    }

    #[test]
    fn test_nested_scoped_name() {
        assert_eq!(
            nested_scoped_name("unlimited", "engineering"),
            "[concat(parameters('apimServiceName'), '/unlimited/engineering')]"
        );
    }

    #[test]
    fn test_product_resource_id() {
        assert_eq!(
            product_resource_id("unlimited"),
            "[resourceId('Microsoft.ApiManagement/service/products', parameters('apimServiceName'), 'unlimited')]"
        );
    }

    #[test]
    fn test_policy_file_link() {
        assert_eq!(
            policy_file_link("starter-productPolicy.xml", false),
            "[concat(parameters('policyXmlBaseUrl'), '/starter-productPolicy.xml')]"
        );
        assert_eq!(
            policy_file_link("starter-productPolicy.xml", true),
            "[concat(parameters('policyXmlBaseUrl'), '/starter-productPolicy.xml', parameters('policyXmlSasToken'))]"
        );
    }
}
