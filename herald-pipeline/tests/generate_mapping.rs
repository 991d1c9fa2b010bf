//! A generate-stage module rendering domain values through the mapping
//! registry, end to end through packaging and export.

use std::sync::Arc;

use herald_core::write_file;
use herald_mapping::{
    DomainType, DomainValue, MappingRegistry, RecordMapper, TargetValue,
};
use herald_pipeline::{
    Artifact, ExportEntry, Pipeline, PipelineContext, PipelineModule, RunConfig, StaticDiscovery,
};
use tempfile::TempDir;

/// Renders an account record in the target representation during generate
/// and packages the rendering.
struct AccountClientModule {
    mappers: MappingRegistry,
}

impl AccountClientModule {
    fn new() -> Self {
        // Mapper registration completes at construction time, before any
        // generate hook can run.
        let mut mappers = MappingRegistry::with_defaults();
        mappers.register(
            DomainType::named("Account"),
            Arc::new(
                RecordMapper::new("Account")
                    .field("owner", DomainType::Text)
                    .field("balance", DomainType::BigInt),
            ),
        );
        Self { mappers }
    }

    fn render(&self) -> eyre::Result<String> {
        let mut members = indexmap::IndexMap::new();
        members.insert("owner".to_string(), DomainValue::Text("ada".into()));
        members.insert(
            "balance".to_string(),
            DomainValue::BigInt(12345678901234567890),
        );

        let rendered = self
            .mappers
            .to_target(&DomainType::named("Account"), &DomainValue::Record(members))?;

        let TargetValue::Object(fields) = rendered else {
            eyre::bail!("account did not map to an object");
        };
        let mut out = String::new();
        for (field, value) in &fields {
            let text = match value {
                TargetValue::Text(s) => s.clone(),
                TargetValue::Null => "null".to_string(),
                other => eyre::bail!("unexpected member shape: {other:?}"),
            };
            out.push_str(&format!("{field} = {text}\n"));
        }
        Ok(out)
    }
}

impl PipelineModule for AccountClientModule {
    fn name(&self) -> &str {
        "account-client"
    }

    fn generate(&self, ctx: &mut PipelineContext) -> eyre::Result<()> {
        let out = ctx.dirs().generate.join("account.properties");
        write_file(&out, &self.render()?)?;
        Ok(())
    }

    fn package(&self, ctx: &mut PipelineContext) -> eyre::Result<()> {
        let generated = ctx.dirs().generate.join("account.properties");
        let packaged = ctx.dirs().package.join("account.properties");
        std::fs::copy(&generated, &packaged)?;
        ctx.register_artifact(Artifact::new("account.rendering", packaged));
        Ok(())
    }
}

#[test]
fn mapped_values_flow_from_generate_to_export() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("model.xml");
    std::fs::write(&source, "<service/>").unwrap();
    let dest = temp.path().join("dist").join("account.properties");

    let mut run = RunConfig::new(temp.path(), vec![source]);
    run.exports.push(ExportEntry::new("account.rendering", &dest));

    let discovery = StaticDiscovery::new().with(|| Ok(Box::new(AccountClientModule::new())));
    Pipeline::with_discovery(discovery).run(run).unwrap();

    let content = std::fs::read_to_string(&dest).unwrap();
    assert_eq!(content, "owner = ada\nbalance = 12345678901234567890\n");
}
