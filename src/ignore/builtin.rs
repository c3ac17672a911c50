/// Processes present on an ordinary Windows desktop that are never worth
/// restoring: OS services, shell hosts, crash handlers and updaters.
pub const BUILTIN_IGNORE: &[&str] = &[
    "ApplicationFrameHost.exe",
    "audiodg.exe",
    "Code.exe",
    // git bash should be started on its own, not as a bare bash
    "bash.exe",
    "conhost.exe",
    "crashpad_handler.exe",
    "csrss.exe",
    "dasHost.exe",
    "DataExchangeHost.exe",
    "dllhost.exe",
    "dwm.exe",
    "explorer.exe",
    "fdm.exe",
    "fontdrvhost.exe",
    "fsnotifier.exe",
    "googleone.exe",
    "GoogleCrashHandler.exe",
    "GoogleCrashHandler64.exe",
    "IAStorDataMgrSvc.exe",
    "IAStorIcon.exe",
    "LDSvc.exe",
    "LockApp.exe",
    "lsass.exe",
    "MsMpEng.exe",
    "NisSrv.exe",
    "Registry",
    "RuntimeBroker.exe",
    "SMSvcHost.exe",
    "SearchApp.exe",
    "SearchIndexer.exe",
    "SecurityHealthService.exe",
    "SecurityHealthSystray.exe",
    "SgrmBroker.exe",
    "ShellExperienceHost.exe",
    "StartMenuExperienceHost.exe",
    "System Idle Process",
    "System",
    "SystemSettings.exe",
    "TextInputHost.exe",
    "WUDFHost.exe",
    "mintty.exe",
    "python.exe",
    "rundll32.exe",
    "services.exe",
    "svchost.exe",
    "sihost.exe",
    "smss.exe",
    "spoolsv.exe",
    "taskhostw.exe",
    "w32time.exe",
    "wdmaud.exe",
    "wininit.exe",
    "winlogon.exe",
    "wlanext.exe",
    "wuauclt.exe",
    "wuauserv.exe",
];
