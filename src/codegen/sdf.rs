use super::ShaderGen;
use crate::catalog::{self, FoldEmission, ORBIT_STATEMENT};
use crate::error::Result;
use crate::kinds::FoldKind;
use crate::model::FractalConfig;

impl ShaderGen {
    // ── Distance function ──────────────────────────────────────────────

    pub(super) fn emit_sdf(&mut self, config: &FractalConfig) -> Result<()> {
        self.line("float2 sdf(float3 p) {");
        self.indent += 1;
        self.line("outputColor = library.orbitInitInf();");
        self.line("float4 new_p = float4(p, 1.0f);");
        self.line("float d = 1e20;");

        // Iteration count is a runtime uniform of the library, not baked in.
        self.line("for (int i = 0; i < library.Iterations; i++) {");
        self.indent += 1;
        for (index, kind) in config.operations.iter().enumerate() {
            self.emit_operation(index, *kind)?;
        }
        self.indent -= 1;
        self.blank();
        self.line("}");

        let ret = catalog::sdf_return(config.terminal).map(str::to_string);
        let ret = self.or_sentinel(ret, "terminal")?;
        self.line(&format!("return {ret};"));
        self.indent -= 1;
        self.line("}");
        Ok(())
    }

    /// One loop-body statement per chain entry, never more, never merged.
    fn emit_operation(&mut self, index: usize, kind: FoldKind) -> Result<()> {
        let call = match catalog::fold_emission(kind) {
            Ok(FoldEmission::OrbitAccumulate) => {
                self.line(ORBIT_STATEMENT);
                return Ok(());
            }
            Ok(FoldEmission::Transform(call)) => Ok(call.expr()),
            Err(e) => Err(e),
        };
        let expr = self.or_sentinel(call, &format!("operation {index}"))?;
        self.line(&format!("new_p = {expr};"));
        Ok(())
    }
}
