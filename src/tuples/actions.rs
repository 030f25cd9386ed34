//! Custom actions, services, and ODBC registration

tuple_definition! {
    /// An action the authored setup injects into a sequence
    CustomAction => CUSTOM_ACTION, CustomActionTupleFields, CustomActionTuple {
        /// Scheduling: immediate, deferred, rollback, or commit
        ExecutionType / execution_type / set_execution_type : Number,
        SourceType / source_type / set_source_type : Number,
        Source / source / set_source : String,
        TargetType / target_type / set_target_type : Number,
        Target / target / set_target : opt String,
        Async / run_async / set_run_async : Bool,
        Hidden / hidden / set_hidden : Bool,
        IgnoreResult / ignore_result / set_ignore_result : Bool,
        Impersonate / impersonate / set_impersonate : Bool,
        Win64 / win64 / set_win64 : Bool,
        ScriptFile / script_file / set_script_file : opt Path,
    }
}

tuple_definition! {
    /// Start, stop, or delete a service during install/uninstall
    ServiceControl => SERVICE_CONTROL, ServiceControlTupleFields, ServiceControlTuple {
        Name / name / set_name : String,
        Event / event / set_event : Number,
        Arguments / arguments / set_arguments : opt String,
        Wait / wait / set_wait : opt Bool,
        ComponentRef / component_ref / set_component_ref : String,
    }
}

tuple_definition! {
    /// Install a service alongside the owning component
    ServiceInstall => SERVICE_INSTALL, ServiceInstallTupleFields, ServiceInstallTuple {
        Name / name / set_name : String,
        DisplayName / display_name / set_display_name : opt String,
        ServiceType / service_type / set_service_type : Number,
        StartType / start_type / set_start_type : Number,
        ErrorControl / error_control / set_error_control : Number,
        LoadOrderGroup / load_order_group / set_load_order_group : opt String,
        Dependencies / dependencies / set_dependencies : opt String,
        StartName / start_name / set_start_name : opt String,
        Password / password / set_password : opt String,
        Arguments / arguments / set_arguments : opt String,
        Description / description / set_description : opt String,
        Interactive / interactive / set_interactive : opt Bool,
        Vital / vital / set_vital : Bool,
        ComponentRef / component_ref / set_component_ref : String,
    }
}

tuple_definition! {
    /// Self-registration request for a DLL file
    SelfReg => SELF_REG, SelfRegTupleFields, SelfRegTuple {
        FileRef / file_ref / set_file_ref : String,
        Cost / cost / set_cost : opt Number,
    }
}

tuple_definition! {
    OdbcDataSource => ODBC_DATA_SOURCE, OdbcDataSourceTupleFields, OdbcDataSourceTuple {
        ComponentRef / component_ref / set_component_ref : String,
        Description / description / set_description : String,
        DriverDescription / driver_description / set_driver_description : String,
        /// 0 = per machine, 1 = per user
        Registration / registration / set_registration : Number,
    }
}

tuple_definition! {
    OdbcDriver => ODBC_DRIVER, OdbcDriverTupleFields, OdbcDriverTuple {
        ComponentRef / component_ref / set_component_ref : String,
        Description / description / set_description : String,
        FileRef / file_ref / set_file_ref : String,
        SetupFileRef / setup_file_ref / set_setup_file_ref : opt String,
    }
}
