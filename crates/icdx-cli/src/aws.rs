use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Build an `SdkConfig` from the CLI flags.
///
/// Region resolution order: the `--region` flag, then the usual
/// environment and profile chain, then `us-east-1`. Bedrock calls fail
/// without an explicit region, so the chain always terminates.
pub async fn build_aws_config(region: Option<String>, profile: Option<String>) -> SdkConfig {
    let region_provider = RegionProviderChain::first_try(region.map(Region::new))
        .or_default_provider()
        .or_else(Region::new("us-east-1"));

    let mut builder = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
    if let Some(profile) = profile {
        builder = builder.profile_name(profile);
    }

    builder.load().await
}
