use super::ShaderGen;
use crate::settings::Settings;

impl ShaderGen {
    /// Fixed wrapper: library include, the `SDF` struct holding the library
    /// instance and color accumulator with the distance function included
    /// inside it, then the ray-marching driver.
    pub(super) fn emit_driver(&mut self, name: &str, settings: &Settings) {
        self.line(&format!(
            "#include \"{}\"",
            settings.include_path(&settings.library_include)
        ));
        self.blank();
        self.line("struct SDF {");
        self.line("SDFractal library;");
        self.line("float3 outputColor;");
        self.blank();
        self.line(&format!(
            "#include \"{}\"",
            settings.include_path(&format!("{name}SDF"))
        ));
        self.line("};");
        self.blank();
        self.line(&format!(
            "#include \"{}\"",
            settings.include_path(&settings.driver_include)
        ));
    }
}
