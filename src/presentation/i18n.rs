use crate::application::dto::StatusMessage;

/// Resolves message keys to localized strings. Built once at startup from the
/// locale environment and passed around immutably; there is no ambient
/// lookup table.
pub struct Translator {
    table: &'static [(&'static str, &'static str)],
}

impl Translator {
    pub fn from_env() -> Self {
        Self::for_language(&detect_language())
    }

    pub fn for_language(lang: &str) -> Self {
        let table = match lang {
            "es" => ES,
            "pt" | "pt_BR" => PT_BR,
            _ => EN,
        };
        Self { table }
    }

    /// Looks the key up, falling back to English and finally to the key
    /// itself so a missing entry stays visible instead of vanishing.
    pub fn tr<'a>(&self, key: &'a str) -> &'a str {
        lookup(self.table, key)
            .or_else(|| lookup(EN, key))
            .unwrap_or(key)
    }

    /// Resolves a status message and substitutes its `{name}` placeholders.
    pub fn format(&self, message: &StatusMessage) -> String {
        let mut text = self.tr(message.key).to_string();
        for (name, value) in &message.args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }
}

fn lookup(
    table: &'static [(&'static str, &'static str)],
    key: &str,
) -> Option<&'static str> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
}

/// `LANG`, then `LANGUAGE`, primary language code when the full locale has
/// no table. Defaults to English.
fn detect_language() -> String {
    let known = ["en", "es", "pt", "pt_BR"];

    let candidates = [
        std::env::var("LANG")
            .unwrap_or_default()
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string(),
        std::env::var("LANGUAGE")
            .unwrap_or_default()
            .split(':')
            .next()
            .unwrap_or_default()
            .to_string(),
    ];

    for candidate in candidates {
        if candidate.is_empty() {
            continue;
        }
        if known.contains(&candidate.as_str()) {
            return candidate;
        }
        let primary = candidate.split('_').next().unwrap_or_default();
        if known.contains(&primary) {
            return primary.to_string();
        }
    }

    "en".to_string()
}

const EN: &[(&str, &str)] = &[
    ("app_name", "Restyle"),
    ("layouts_tab", "Layouts"),
    ("effects_tab", "Effects"),
    ("themes_tab", "Themes"),
    ("select_layout", "Select Layout"),
    ("applying", "Applying {layout} layout..."),
    ("success", "Successfully applied {layout} layout"),
    ("error_config", "Error: Config file not found - {file}"),
    ("error_applying", "Error applying layout: {error}"),
    ("error", "Error: {error}"),
    ("apply", "Apply Layout"),
    ("about", "About"),
    ("quit", "Quit"),
    ("description_layout", "Apply the {layout} layout to your desktop."),
    ("effects_description", "Enhance your desktop with visual effects"),
    ("extension_settings", "Extension Settings"),
    ("open_settings", "Open Settings"),
    ("not_installed", "Not installed"),
    ("install_extension", "Install Extension"),
    ("enable", "Enable"),
    ("disable", "Disable"),
    ("themes_description", "Customize your desktop appearance"),
    ("gtk_theme", "GTK Theme"),
    ("icon_theme", "Icon Theme"),
    ("shell_theme", "Shell Theme"),
    ("apply_theme", "Apply Theme"),
    ("no_themes_found", "No themes found"),
    (
        "user_theme_required",
        "User Themes extension is required to apply shell themes",
    ),
    ("install_user_theme", "Install User Themes Extension"),
    ("cancel", "Cancel"),
    ("applying_shell", "Applying shell theme {theme}..."),
    ("success_shell", "Successfully applied shell theme {theme}"),
    ("error_shell", "Error applying shell theme: {error}"),
    ("applying_gtk", "Applying GTK theme {theme}..."),
    ("success_gtk", "Successfully applied GTK theme {theme}"),
    ("error_gtk", "Error applying GTK theme: {error}"),
    ("applying_icons", "Applying icon theme {theme}..."),
    ("success_icons", "Successfully applied icon theme {theme}"),
    ("error_icons", "Error applying icon theme: {error}"),
    ("shell_theme_restart", "Restart GNOME Shell to see the changes"),
    ("gtk_theme_restart", "Restart applications to see the changes"),
    ("icon_theme_restart", "Restart applications to see the changes"),
    ("about_description", "Customize your GNOME desktop appearance"),
    ("quit_confirm", "Are you sure you want to quit?"),
    ("quit_confirm_title", "Quit Restyle"),
    ("intro_title", "Welcome to Restyle"),
    (
        "intro_message",
        "This tool allows you to customize your GNOME desktop with different layouts, effects, and themes. Before making changes, we recommend creating a backup of your current settings.",
    ),
    ("intro_dont_show", "Don't show this again"),
    ("backup_created", "Backup created successfully"),
    ("backup_error", "Error creating backup: {error}"),
    ("backup_before_apply", "Create backup before applying layout?"),
    ("backup_restore", "Restore from backup"),
    ("backup_restore_title", "Restore Previous Settings"),
    (
        "backup_restore_message",
        "Are you sure you want to restore your previous settings? This will undo any changes made since the last backup.",
    ),
    ("backup_restore_success", "Settings restored successfully"),
    ("backup_restore_error", "Error restoring backup: {error}"),
    ("test_layout", "Test Layout"),
    ("test_layout_title", "Test Layout"),
    (
        "test_layout_message",
        "Do you want to test this layout before applying it permanently? You can revert changes if needed.",
    ),
    ("test_layout_keep", "Keep Changes"),
    ("test_layout_revert", "Revert Changes"),
    ("extensions_disabled", "GNOME Shell extensions are disabled"),
    (
        "extensions_enable_prompt",
        "Do you want to enable GNOME Shell extensions to apply this layout? Some layouts require extensions to function properly.",
    ),
    (
        "extensions_enabled_success",
        "GNOME Shell extensions have been enabled. A restart of GNOME Shell may be required for changes to take effect.",
    ),
    (
        "extensions_enable_error",
        "Error enabling GNOME Shell extensions: {error}",
    ),
    ("close", "Close"),
    ("skip", "Skip"),
    ("backup", "Backup"),
    ("unknown", "Unknown error"),
];

const ES: &[(&str, &str)] = &[
    ("app_name", "Restyle"),
    ("layouts_tab", "Diseños"),
    ("effects_tab", "Efectos"),
    ("themes_tab", "Temas"),
    ("select_layout", "Seleccionar Diseño"),
    ("applying", "Aplicando diseño {layout}..."),
    ("success", "Diseño {layout} aplicado con éxito"),
    ("error_config", "Error: Archivo de configuración no encontrado - {file}"),
    ("error_applying", "Error al aplicar el diseño: {error}"),
    ("error", "Error: {error}"),
    ("apply", "Aplicar Diseño"),
    ("about", "Acerca de"),
    ("quit", "Salir"),
    ("description_layout", "Aplica el diseño {layout} a tu escritorio."),
    ("effects_description", "Mejora tu escritorio con efectos visuales"),
    ("extension_settings", "Configuración de la Extensión"),
    ("open_settings", "Abrir Configuración"),
    ("not_installed", "No instalada"),
    ("install_extension", "Instalar Extensión"),
    ("enable", "Activar"),
    ("disable", "Desactivar"),
    ("themes_description", "Personaliza la apariencia de tu escritorio"),
    ("gtk_theme", "Tema GTK"),
    ("icon_theme", "Tema de Iconos"),
    ("shell_theme", "Tema del Shell"),
    ("apply_theme", "Aplicar Tema"),
    ("no_themes_found", "No se encontraron temas"),
    (
        "user_theme_required",
        "Se requiere la extensión User Themes para aplicar temas del shell",
    ),
    ("install_user_theme", "Instalar Extensión User Themes"),
    ("cancel", "Cancelar"),
    ("applying_shell", "Aplicando tema del shell {theme}..."),
    ("success_shell", "Tema del shell {theme} aplicado con éxito"),
    ("error_shell", "Error al aplicar el tema del shell: {error}"),
    ("applying_gtk", "Aplicando tema GTK {theme}..."),
    ("success_gtk", "Tema GTK {theme} aplicado con éxito"),
    ("error_gtk", "Error al aplicar el tema GTK: {error}"),
    ("applying_icons", "Aplicando tema de iconos {theme}..."),
    ("success_icons", "Tema de iconos {theme} aplicado con éxito"),
    ("error_icons", "Error al aplicar el tema de iconos: {error}"),
    ("shell_theme_restart", "Reinicia GNOME Shell para ver los cambios"),
    ("gtk_theme_restart", "Reinicia las aplicaciones para ver los cambios"),
    ("icon_theme_restart", "Reinicia las aplicaciones para ver los cambios"),
    ("about_description", "Personaliza la apariencia de tu escritorio GNOME"),
    ("quit_confirm", "¿Estás seguro de que quieres salir?"),
    ("quit_confirm_title", "Salir de Restyle"),
    ("intro_title", "Bienvenido a Restyle"),
    (
        "intro_message",
        "Esta herramienta te permite personalizar tu escritorio GNOME con diferentes diseños, efectos y temas. Antes de hacer cambios, recomendamos crear una copia de seguridad de tu configuración actual.",
    ),
    ("intro_dont_show", "No mostrar de nuevo"),
    ("backup_created", "Copia de seguridad creada con éxito"),
    ("backup_error", "Error al crear la copia de seguridad: {error}"),
    (
        "backup_before_apply",
        "¿Crear copia de seguridad antes de aplicar el diseño?",
    ),
    ("backup_restore", "Restaurar desde copia de seguridad"),
    ("backup_restore_title", "Restaurar Configuración Anterior"),
    (
        "backup_restore_message",
        "¿Estás seguro de que quieres restaurar tu configuración anterior? Esto deshará los cambios realizados desde la última copia de seguridad.",
    ),
    ("backup_restore_success", "Configuración restaurada con éxito"),
    ("backup_restore_error", "Error al restaurar la copia de seguridad: {error}"),
    ("test_layout", "Probar Diseño"),
    ("test_layout_title", "Probar Diseño"),
    (
        "test_layout_message",
        "¿Quieres probar este diseño antes de aplicarlo permanentemente? Puedes revertir los cambios si es necesario.",
    ),
    ("test_layout_keep", "Mantener Cambios"),
    ("test_layout_revert", "Revertir Cambios"),
    ("extensions_disabled", "Las extensiones de GNOME Shell están desactivadas"),
    (
        "extensions_enable_prompt",
        "¿Quieres activar las extensiones de GNOME Shell para aplicar este diseño? Algunos diseños requieren extensiones para funcionar correctamente.",
    ),
    (
        "extensions_enabled_success",
        "Las extensiones de GNOME Shell han sido activadas. Puede ser necesario reiniciar GNOME Shell para que los cambios surtan efecto.",
    ),
    (
        "extensions_enable_error",
        "Error al activar las extensiones de GNOME Shell: {error}",
    ),
    ("close", "Cerrar"),
    ("skip", "Omitir"),
    ("backup", "Copia de seguridad"),
    ("unknown", "Error desconocido"),
];

const PT_BR: &[(&str, &str)] = &[
    ("app_name", "Restyle"),
    ("layouts_tab", "Layouts"),
    ("effects_tab", "Efeitos"),
    ("themes_tab", "Temas"),
    ("select_layout", "Selecionar Layout"),
    ("applying", "Aplicando layout {layout}..."),
    ("success", "Layout {layout} aplicado com sucesso"),
    ("error_config", "Erro: Arquivo de configuração não encontrado - {file}"),
    ("error_applying", "Erro ao aplicar o layout: {error}"),
    ("error", "Erro: {error}"),
    ("apply", "Aplicar Layout"),
    ("about", "Sobre"),
    ("quit", "Sair"),
    ("description_layout", "Aplica o layout {layout} à sua área de trabalho."),
    (
        "effects_description",
        "Melhore sua área de trabalho com efeitos visuais",
    ),
    ("extension_settings", "Configurações da Extensão"),
    ("open_settings", "Abrir Configurações"),
    ("not_installed", "Não instalado"),
    ("install_extension", "Instalar Extensão"),
    ("enable", "Ativar"),
    ("disable", "Desativar"),
    ("themes_description", "Personalize a aparência da sua área de trabalho"),
    ("gtk_theme", "Tema GTK"),
    ("icon_theme", "Tema de Ícones"),
    ("shell_theme", "Tema do Shell"),
    ("apply_theme", "Aplicar Tema"),
    ("no_themes_found", "Nenhum tema encontrado"),
    (
        "user_theme_required",
        "A extensão User Themes é necessária para aplicar temas do shell",
    ),
    ("install_user_theme", "Instalar Extensão User Themes"),
    ("cancel", "Cancelar"),
    ("applying_shell", "Aplicando tema do shell {theme}..."),
    ("success_shell", "Tema do shell {theme} aplicado com sucesso"),
    ("error_shell", "Erro ao aplicar o tema do shell: {error}"),
    ("applying_gtk", "Aplicando tema GTK {theme}..."),
    ("success_gtk", "Tema GTK {theme} aplicado com sucesso"),
    ("error_gtk", "Erro ao aplicar o tema GTK: {error}"),
    ("applying_icons", "Aplicando tema de ícones {theme}..."),
    ("success_icons", "Tema de ícones {theme} aplicado com sucesso"),
    ("error_icons", "Erro ao aplicar o tema de ícones: {error}"),
    ("shell_theme_restart", "Reinicie o GNOME Shell para ver as alterações"),
    ("gtk_theme_restart", "Reinicie os aplicativos para ver as alterações"),
    ("icon_theme_restart", "Reinicie os aplicativos para ver as alterações"),
    (
        "about_description",
        "Personalize a aparência da sua área de trabalho GNOME",
    ),
    ("quit_confirm", "Tem certeza de que deseja sair?"),
    ("quit_confirm_title", "Sair do Restyle"),
    ("intro_title", "Bem-vindo ao Restyle"),
    (
        "intro_message",
        "Esta ferramenta permite personalizar sua área de trabalho GNOME com diferentes layouts, efeitos e temas. Antes de fazer alterações, recomendamos criar um backup das suas configurações atuais.",
    ),
    ("intro_dont_show", "Não mostrar isso novamente"),
    ("backup_created", "Backup criado com sucesso"),
    ("backup_error", "Erro ao criar backup: {error}"),
    ("backup_before_apply", "Criar backup antes de aplicar o layout?"),
    ("backup_restore", "Restaurar do backup"),
    ("backup_restore_title", "Restaurar Configurações Anteriores"),
    (
        "backup_restore_message",
        "Tem certeza de que deseja restaurar suas configurações anteriores? Isso desfará quaisquer alterações feitas desde o último backup.",
    ),
    ("backup_restore_success", "Configurações restauradas com sucesso"),
    ("backup_restore_error", "Erro ao restaurar backup: {error}"),
    ("test_layout", "Testar Layout"),
    ("test_layout_title", "Testar Layout"),
    (
        "test_layout_message",
        "Deseja testar este layout antes de aplicá-lo permanentemente? Você pode reverter as alterações se necessário.",
    ),
    ("test_layout_keep", "Manter Alterações"),
    ("test_layout_revert", "Reverter Alterações"),
    ("extensions_disabled", "As extensões do GNOME Shell estão desativadas"),
    (
        "extensions_enable_prompt",
        "Você deseja ativar as extensões do GNOME Shell para aplicar este layout? Alguns layouts requerem extensões para funcionar corretamente.",
    ),
    (
        "extensions_enabled_success",
        "As extensões do GNOME Shell foram ativadas. Pode ser necessário reiniciar o GNOME Shell para que as alterações tenham efeito.",
    ),
    (
        "extensions_enable_error",
        "Erro ao ativar as extensões do GNOME Shell: {error}",
    ),
    ("close", "Fechar"),
    ("skip", "Pular"),
    ("backup", "Backup"),
    ("unknown", "Erro desconhecido"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_falls_back_to_english() {
        let translator = Translator::for_language("tlh");
        assert_eq!(translator.tr("apply"), "Apply Layout");
    }

    #[test]
    fn placeholders_are_substituted() {
        let translator = Translator::for_language("en");
        let message = StatusMessage::with("success", vec![("layout", "Classic".to_string())]);
        assert_eq!(
            translator.format(&message),
            "Successfully applied Classic layout"
        );
    }

    #[test]
    fn localized_tables_resolve_their_own_keys() {
        let translator = Translator::for_language("es");
        assert_eq!(translator.tr("success_gtk"), "Tema GTK {theme} aplicado con éxito");
        assert_eq!(Translator::for_language("pt").tr("quit"), "Sair");
    }

    #[test]
    fn missing_key_stays_visible_as_itself() {
        let translator = Translator::for_language("en");
        assert_eq!(translator.tr("no_such_key"), "no_such_key");
    }

    #[test]
    fn primary_language_code_resolves_regional_locale() {
        let translator = Translator::for_language("pt_BR");
        assert_eq!(translator.tr("effects_tab"), "Efeitos");
    }

    #[test]
    fn test_confirmation_keys_exist_in_every_table() {
        for table in [EN, ES, PT_BR] {
            for key in ["test_layout", "test_layout_title", "test_layout_message"] {
                assert!(lookup(table, key).is_some(), "{key}");
            }
        }
    }
}
